//! The Trotter stepper: [`EvolutionCalculator`] advances an observable through `N`
//! steps, maintaining an exact closed-form state as a sum of Pauli strings with
//! [`Scalar`] coefficients.

use thiserror::Error;

use crate::hamiltonian::Hamiltonian;
use crate::pauli::{
    PauliCombination,
    PauliString,
    ScaledPauliString,
};
use crate::scalar::{
    half,
    rc,
    Scalar,
    ScalarError,
};

/// The error surfaced by [`EvolutionCalculator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvolutionError {
    /// A rotation required a scalar operation with no closed form (§7: "fatal for
    /// the current invocation").
    #[error(transparent)]
    Scalar(#[from] ScalarError),
}

/// Iterates Trotter steps over an observable's exact closed-form expansion under a
/// fixed [`Hamiltonian`].
///
/// The stepper is single-threaded by contract: each [`Self::advance`] call mutates
/// `state` in place and is not reentrant (§5).
#[derive(Debug, Clone)]
pub struct EvolutionCalculator {
    hamiltonian: Hamiltonian,
    state: PauliCombination,
    new_state: PauliCombination,
    n: u64,
    tau: Scalar,
}

impl EvolutionCalculator {
    /// Construct a calculator from an initial observable and the Hamiltonian that
    /// drives its evolution. The Hamiltonian is taken by ownership (§4.4).
    pub fn new(observable: ScaledPauliString, hamiltonian: Hamiltonian) -> Self {
        let mut state = PauliCombination::new();
        state.add(observable.pauli, observable.coef);
        EvolutionCalculator {
            hamiltonian,
            state,
            new_state: PauliCombination::new(),
            n: 0,
            tau: Scalar::tau(),
        }
    }

    /// The current state: a sum of Pauli strings with scalar coefficients.
    pub fn state(&self) -> &PauliCombination {
        &self.state
    }

    /// The formal per-step time variable substituted by the sampling loop.
    pub fn tau(&self) -> &Scalar {
        &self.tau
    }

    /// The number of completed Trotter steps.
    pub fn step_count(&self) -> u64 {
        self.n
    }

    /// Advance the state through `count` Trotter steps.
    ///
    /// Per step, for each group in the Hamiltonian and each of its color classes,
    /// collects the set of conflicting terms reachable from any site occupied by
    /// the current state (deduplicated, "first writer wins") and applies the
    /// closed-form rotation for each in turn.
    pub fn advance(&mut self, count: u64) -> Result<(), EvolutionError> {
        let arg_coef = self.tau.clone().scale(rc(0, 2));
        for _ in 0..count {
            self.n += 1;
            for group in self.hamiltonian.groups() {
                for color in 0..group.period_length() {
                    let sites_mask =
                        self.state.keys().fold(0u64, |mask, p| mask | p.sites());
                    let mut conflicts = PauliCombination::new();
                    for site in PauliString::mask_to_vector(sites_mask) {
                        for (p, coef) in group.filter(color, site as i64) {
                            conflicts.try_insert(p, coef);
                        }
                    }
                    tracing::trace!(
                        color,
                        period_length = group.period_length(),
                        conflicts = conflicts.len(),
                        "color pass"
                    );
                    for (p, p_coef) in conflicts {
                        Self::apply_rotation(&self.state, &mut self.new_state, p, &p_coef, &arg_coef)?;
                        std::mem::swap(&mut self.state, &mut self.new_state);
                    }
                }
            }
            tracing::debug!(step = self.n, state_len = self.state.len(), "advanced one Trotter step");
        }
        Ok(())
    }

    /// Apply `exp(i*theta*P) A exp(-i*theta*P)` to every `(A, A_coef)` in `state`,
    /// writing the result into `new_state` (cleared first).
    ///
    /// `new_state` is built via [`PauliCombination::add`], which collapses like
    /// terms and prunes exact zeros on every insert; this maintains the
    /// unique-keys/no-zero-coefficients invariant incrementally rather than via a
    /// separate sort-and-sweep pass over the finished buffer, since both reach the
    /// same normal form.
    fn apply_rotation(
        state: &PauliCombination,
        new_state: &mut PauliCombination,
        p: PauliString,
        p_coef: &Scalar,
        arg_coef: &Scalar,
    ) -> Result<(), EvolutionError> {
        let phase = p.phase_adjustment();
        let arg = arg_coef.clone() * p_coef.clone().scale(phase);
        let pos = arg.exp()?;
        let neg = (-arg).exp()?;
        let cos_part = (pos.clone() + neg.clone()).scale(half());
        let sin_half = (pos - neg).scale(half());

        new_state.clear();
        for (&a, a_coef) in state.iter() {
            if p.commutes_with(a) {
                new_state.add(a, a_coef.clone());
                continue;
            }
            let (pa, sign) = p.product(a);
            let sin_factor = rc(sign, 0) * phase.conj();
            new_state.add(a, cos_part.clone() * a_coef.clone());
            new_state.add(pa, sin_half.clone().scale(sin_factor) * a_coef.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pauli::Matrix;

    #[test]
    fn identity_hamiltonian_leaves_the_observable_unchanged() {
        let z0 = PauliString::single(0, Matrix::Z);
        let hamiltonian = Hamiltonian::new(PauliCombination::new());
        let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
        let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
        calculator.advance(5).unwrap();
        assert_eq!(calculator.state().len(), 1);
        assert_eq!(calculator.state().get(&z0), Some(&Scalar::one()));
    }

    #[test]
    fn commuting_hamiltonian_leaves_the_observable_unchanged() {
        let z0 = PauliString::single(0, Matrix::Z);
        let hamiltonian = Hamiltonian::new(PauliCombination::single(z0, Scalar::one()));
        let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
        let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
        calculator.advance(1).unwrap();
        assert_eq!(calculator.state().len(), 1);
        assert_eq!(calculator.state().get(&z0), Some(&Scalar::one()));
    }

    #[test]
    fn single_non_commuting_rotation_produces_a_cos_sin_pair() {
        let x0 = PauliString::single(0, Matrix::X);
        let z0 = PauliString::single(0, Matrix::Z);
        let hamiltonian = Hamiltonian::new(PauliCombination::single(x0, Scalar::one()));
        let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
        let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
        calculator.advance(1).unwrap();

        assert_eq!(calculator.state().len(), 2);
        let y0 = PauliString::single(0, Matrix::Y);
        assert!(calculator.state().get(&z0).is_some());
        assert!(calculator.state().get(&y0).is_some());

        // tau -> 0: the original observable survives with coefficient 1, everything
        // else evaluates to zero (property 12).
        let z_coef = calculator.state().get(&z0).unwrap().substitute_tau(0.0);
        assert!((z_coef.re - 1.0).abs() < 1e-12);
        assert!(z_coef.im.abs() < 1e-12);
        let y_coef = calculator.state().get(&y0).unwrap().substitute_tau(0.0);
        assert!(y_coef.norm() < 1e-12);
    }

    #[test]
    fn advance_never_leaves_duplicate_or_zero_entries() {
        let x0 = PauliString::single(0, Matrix::X);
        let x0x1 =
            PauliString::single(0, Matrix::X).combine(PauliString::single(1, Matrix::X));
        let z0 = PauliString::single(0, Matrix::Z);
        let hamiltonian =
            Hamiltonian::new(PauliCombination::from_iter([(x0x1, Scalar::one()), (x0, Scalar::one())]));
        let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
        let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
        calculator.advance(3).unwrap();

        let mut seen = Vec::new();
        for (pauli, coef) in calculator.state().iter() {
            assert!(!coef.is_zero(), "state must never carry an exact-zero coefficient");
            assert!(!seen.contains(pauli), "state keys must be pairwise distinct");
            seen.push(*pauli);
        }
    }

    #[test]
    fn transverse_field_ising_grows_past_its_initial_support() {
        // H = {X0X1, Z0}, observable Z0. The X0X1 group's second color class only
        // reaches the translated X0 term once the first rotation has grown the
        // state's support onto site 1, and the Z0 group's single color class
        // likewise reaches the translated Z1 term once the support has grown
        // further still -- each of those extra translated terms contributes its
        // own non-commuting rotation, so one step leaves nine entries, not the
        // three a single-site instance like `property_13` would produce.
        let x0x1 =
            PauliString::single(0, Matrix::X).combine(PauliString::single(1, Matrix::X));
        let z0 = PauliString::single(0, Matrix::Z);
        let hamiltonian =
            Hamiltonian::new(PauliCombination::from_iter([(x0x1, Scalar::one()), (z0, Scalar::one())]));
        let observable = ScaledPauliString { pauli: z0, coef: Scalar::one() };
        let mut calculator = EvolutionCalculator::new(observable, hamiltonian);
        calculator.advance(1).unwrap();

        assert_eq!(calculator.state().len(), 9);
        assert!(calculator.state().get(&z0).is_some());
        let mut seen = Vec::new();
        for (pauli, coef) in calculator.state().iter() {
            assert!(!coef.is_zero());
            assert!(!seen.contains(pauli));
            seen.push(*pauli);
        }
    }
}
