use super::string::{
    Matrix,
    PauliString,
};
use crate::scalar::Scalar;

/// A Pauli string paired with its scalar coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPauliString {
    /// The Pauli string.
    pub pauli: PauliString,
    /// Its coefficient.
    pub coef: Scalar,
}

impl ScaledPauliString {
    /// Build a multi-site operator out of single-site `(site, matrix)` pieces,
    /// combining their symplectic bits and repairing the resulting phase so the
    /// coefficient carries it instead of the (otherwise phase-less) [`PauliString`]
    /// encoding.
    ///
    /// # Panics
    /// Panics if two pieces name the same site (the caller is expected to supply a
    /// Pauli literal with distinct sites, e.g. one character per site).
    pub fn from_sites(sites: impl IntoIterator<Item = (u32, Matrix)>) -> Self {
        let mut pauli = PauliString::IDENTITY;
        let mut seen = 0u64;
        for (site, matrix) in sites {
            assert!(seen & (1 << site) == 0, "site {site} specified twice");
            seen |= 1 << site;
            pauli = pauli.combine(PauliString::single(site, matrix));
        }
        let coef = Scalar::constant(pauli.phase_adjustment().conj());
        ScaledPauliString { pauli, coef }
    }
}
