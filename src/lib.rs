// lints and similar
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
// opting out is the exception
#![warn(missing_copy_implementations)]

// some guidelines (should do a better contributing file ...):
//
// If possible all structs and enums should derive
// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
// in this order! The fixed order, so that it is easier to see if something is missing.
// If a trait cannot be derived and it makes sense to implement it, or we need some
// custom implementation, do it manually.
//
// All types must implement Copy, except if they are really not Copy (e.g., anything
// holding a Scalar, which owns a Vec).

//! Symbolic Heisenberg-picture time evolution of a Pauli-string observable under a
//! lattice Hamiltonian, via a first-order Suzuki–Trotter product formula.
//!
//! The crate is organized bottom-up:
//! - [`pauli`] — the bit-packed Pauli-string algebra: product, commutation,
//!   translation, phase tracking, and polarization.
//! - [`scalar`] — the closed-form scalar kernel backing each Pauli string's
//!   coefficient.
//! - [`hamiltonian`] — partitions a Hamiltonian's Pauli-string terms into
//!   mutually-commuting groups, refined by a translation-periodicity analysis that
//!   enables lazy, site-indexed generation of conflicting terms.
//! - [`evolution`] — the Trotter stepper: [`evolution::EvolutionCalculator`]
//!   advances an observable through `N` steps, maintaining an exact closed-form
//!   state as a sum of Pauli strings with [`scalar::Scalar`] coefficients.
//! - [`parser`] — textual `"XX+Z"`-style Pauli-literal parsing, a thin collaborator
//!   around the core, used by the `trotter` binary.
//!
//! ```
//! use trotter_pauli::{
//!     evolution::EvolutionCalculator,
//!     hamiltonian::Hamiltonian,
//!     pauli::{Matrix, PauliCombination, PauliString, ScaledPauliString},
//!     scalar::Scalar,
//! };
//!
//! let z0 = PauliString::single(0, Matrix::Z);
//! let x0 = PauliString::single(0, Matrix::X);
//! let hamiltonian = Hamiltonian::new(PauliCombination::single(x0, Scalar::one()));
//! let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
//!
//! let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
//! calculator.advance(1).unwrap();
//! assert!(calculator.state().get(&z0).is_some());
//! ```

pub mod evolution;
pub mod hamiltonian;
pub mod parser;
pub mod pauli;
pub mod scalar;
