//! The bit-packed Pauli-string algebra: a single machine word's worth of
//! `{I, X, Y, Z}`-valued sites, with product, commutation, translation, phase
//! tracking, and polarization.

mod combination;
mod scaled;
mod string;

pub use combination::PauliCombination;
pub use scaled::ScaledPauliString;
pub use string::{
    Matrix,
    PauliString,
    WORD_WIDTH,
};
