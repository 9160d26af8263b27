use itertools::Itertools;

use crate::pauli::{
    PauliCombination,
    PauliString,
};
use crate::scalar::Scalar;

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// One mutually-commuting subset of a [`super::Hamiltonian`]'s base terms, enriched
/// by a translation-periodicity descriptor that partitions the lattice into
/// `period_length` further "color classes".
///
/// The lattice is invariant under translation by `block_size`; within one
/// translation period, a base string of support length `s` produces `s` distinct
/// shift classes indexed by `color ∈ [0, period_length)`.
#[derive(Debug, Clone)]
pub struct Group {
    base_strings: PauliCombination,
    starting_point: i64,
    block_size: u64,
    period_length: u64,
}

impl Group {
    /// Build a group from its (mutually commuting) base strings, computing the
    /// periodicity descriptor from the union of their occupied sites.
    pub(crate) fn new(base_strings: PauliCombination) -> Self {
        let occupied = base_strings.keys().fold(0u64, |mask, p| mask | p.sites());
        let sites = PauliString::mask_to_vector(occupied);
        let (starting_point, block_size, period_length) = match sites.as_slice() {
            [] => (0, 1, 1),
            [single] => (*single as i64, 1, 1),
            [first, .., last] => {
                let gaps = sites.iter().tuple_windows().map(|(a, b)| (b - a) as u64);
                let block_size = gaps.fold(0u64, gcd);
                let period_length = (*last as i64 - *first as i64) as u64 / block_size + 1;
                (*first as i64, block_size, period_length)
            }
        };
        Group { base_strings, starting_point, block_size, period_length }
    }

    /// The group's base strings (mutually commuting by construction).
    pub fn base_strings(&self) -> &PauliCombination {
        &self.base_strings
    }

    /// The smallest occupied site among the group's base strings.
    pub fn starting_point(&self) -> i64 {
        self.starting_point
    }

    /// `gcd` of consecutive gaps among occupied sites (`1` if the group occupies a
    /// single site).
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// The number of color classes; equal to `1` iff the group's base strings all
    /// occupy a single common site.
    pub fn period_length(&self) -> u64 {
        self.period_length
    }

    /// Which color class the translation `shift` falls into.
    fn color_rule(&self, shift: i64) -> u64 {
        if shift >= 0 {
            (shift as u64 / self.block_size) % self.period_length
        } else {
            let s = (-shift - 1) as u64;
            self.period_length - 1 - (s / self.block_size) % self.period_length
        }
    }

    /// The combination of translated base strings whose support, translated to
    /// intersect `site`, falls into the given `color` class.
    pub fn filter(&self, color: u64, site: i64) -> PauliCombination {
        let mut result = PauliCombination::new();
        for (base, coef) in self.base_strings.iter() {
            for string_site in PauliString::mask_to_vector(base.sites()) {
                let shift = site - string_site as i64;
                if self.color_rule(shift) == color {
                    result.add(base.translate(shift as i32), coef.clone());
                }
            }
        }
        result
    }
}
