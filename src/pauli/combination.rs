use hashbrown::{
    hash_map,
    HashMap,
};

use super::string::PauliString;
use crate::scalar::Scalar;

/// A `PauliString → Scalar` mapping with the invariant that no entry's coefficient
/// is exactly zero.
#[derive(Debug, Clone, Default)]
pub struct PauliCombination {
    terms: HashMap<PauliString, Scalar>,
}

impl PauliCombination {
    /// An empty combination.
    pub fn new() -> Self {
        PauliCombination { terms: HashMap::new() }
    }

    /// A combination with one entry.
    pub fn single(pauli: PauliString, coef: Scalar) -> Self {
        let mut combination = Self::new();
        combination.add(pauli, coef);
        combination
    }

    /// Add `coef` onto `pauli`'s existing coefficient (zero if absent), removing the
    /// entry entirely if the sum is exactly zero.
    pub fn add(&mut self, pauli: PauliString, coef: Scalar) {
        match self.terms.entry(pauli) {
            hash_map::Entry::Occupied(mut entry) => {
                let summed = entry.get().clone() + coef;
                if summed.is_zero() {
                    entry.remove();
                } else {
                    *entry.get_mut() = summed;
                }
            }
            hash_map::Entry::Vacant(entry) => {
                if !coef.is_zero() {
                    entry.insert(coef);
                }
            }
        }
    }

    /// Insert `(pauli, coef)` only if `pauli` is not already present ("first writer
    /// wins"), used to deduplicate translated terms reachable from more than one
    /// requested site within the same color class.
    pub fn try_insert(&mut self, pauli: PauliString, coef: Scalar) {
        self.terms.entry(pauli).or_insert(coef);
    }

    /// The coefficient of `pauli`, if present.
    pub fn get(&self, pauli: &PauliString) -> Option<&Scalar> {
        self.terms.get(pauli)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Remove every entry, leaving an empty combination.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Whether the combination has no entries.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(pauli, coef)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&PauliString, &Scalar)> {
        self.terms.iter()
    }

    /// Iterate over the keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &PauliString> {
        self.terms.keys()
    }
}

impl IntoIterator for PauliCombination {
    type Item = (PauliString, Scalar);
    type IntoIter = hash_map::IntoIter<PauliString, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl FromIterator<(PauliString, Scalar)> for PauliCombination {
    fn from_iter<I: IntoIterator<Item = (PauliString, Scalar)>>(iter: I) -> Self {
        let mut combination = Self::new();
        for (pauli, coef) in iter {
            combination.add(pauli, coef);
        }
        combination
    }
}
