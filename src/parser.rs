//! Textual `"XX+Z"`-style Pauli-literal parsing, a thin collaborator around the
//! core (§6), used by the `trotter` binary. Out of scope for the kernel proper: no
//! arithmetic, no site translation beyond what the caller requests.

use thiserror::Error;

use crate::pauli::{
    Matrix,
    PauliCombination,
    ScaledPauliString,
    WORD_WIDTH,
};

/// A malformed Pauli literal or Hamiltonian string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `+`-separated part (or the whole literal) was empty.
    #[error("Pauli literal must not be empty")]
    Empty,
    /// A character outside `{X, Y, Z}` appeared in a literal.
    #[error("'{0}' is not a valid Pauli character (expected X, Y, or Z)")]
    InvalidChar(char),
    /// Placing the literal at `offset` would need a site past the lattice's word
    /// width (`PauliString::single` panics rather than rejecting this, so it must be
    /// caught here instead).
    #[error("literal of length {len} placed at site {offset} exceeds the {max}-qubit word width")]
    TooLong {
        /// The literal's character count.
        len: usize,
        /// The lattice site the literal starts at.
        offset: u32,
        /// The lattice's word width.
        max: u32,
    },
}

/// Parse a single Pauli literal (e.g. `"XYZ"`) into a [`ScaledPauliString`],
/// placing character `i` at site `offset + i` and repairing the phase the
/// symplectic encoding loses for any `Y`s. Rejects a literal that would place a
/// site past [`WORD_WIDTH`] instead of letting the underlying constructor panic.
pub fn parse_literal_at(literal: &str, offset: u32) -> Result<ScaledPauliString, ParseError> {
    if literal.is_empty() {
        return Err(ParseError::Empty);
    }
    let len = literal.chars().count();
    let fits = u32::try_from(len).ok().and_then(|len| offset.checked_add(len)).is_some_and(|end| end <= WORD_WIDTH);
    if !fits {
        return Err(ParseError::TooLong { len, offset, max: WORD_WIDTH });
    }
    let sites = literal
        .chars()
        .enumerate()
        .map(|(i, c)| Matrix::from_char(c).map(|m| (offset + i as u32, m)).ok_or(ParseError::InvalidChar(c)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScaledPauliString::from_sites(sites))
}

/// Parse a single Pauli literal (e.g. `"XYZ"`) into a [`ScaledPauliString`],
/// placing character `i` at site `i` (§6: "placed starting at lattice site 0").
pub fn parse_literal(literal: &str) -> Result<ScaledPauliString, ParseError> {
    parse_literal_at(literal, 0)
}

/// Parse a `+`-separated Hamiltonian string (e.g. `"XX+Z"`) into a combination of
/// base terms, each contributing the phase-repaired coefficient of its own literal
/// (§6: "each literal is placed starting at lattice site 0").
pub fn parse_hamiltonian(spec: &str) -> Result<PauliCombination, ParseError> {
    let mut combination = PauliCombination::new();
    for part in spec.split('+') {
        let term = parse_literal(part)?;
        combination.add(term.pauli, term.coef);
    }
    Ok(combination)
}
