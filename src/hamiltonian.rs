//! Partitions a Hamiltonian's Pauli-string terms into mutually-commuting groups via
//! greedy Welsh–Powell coloring of the anti-commutation graph, then refines each
//! group by a translation-periodicity analysis (see [`group::Group`]) that enables
//! lazy, site-indexed generation of conflicting terms during evolution.

mod group;

pub use group::Group;

use crate::pauli::{
    PauliCombination,
    PauliString,
};
use crate::scalar::Scalar;

/// A Hamiltonian, partitioned into mutually-commuting [`Group`]s.
#[derive(Debug, Clone)]
pub struct Hamiltonian {
    groups: Vec<Group>,
}

impl Hamiltonian {
    /// Partition `sum` into mutually-commuting groups via greedy Welsh–Powell
    /// coloring of the anti-commutation graph (vertices = terms, edges = pairs that
    /// do not commute), then compute each group's periodicity descriptor.
    ///
    /// Ties among equal-degree vertices are broken by the term's `PauliString`
    /// ordering, which fixes a deterministic "original vertex index" independent of
    /// the input combination's (unspecified) iteration order.
    pub fn new(sum: PauliCombination) -> Self {
        let mut terms: Vec<(PauliString, Scalar)> = sum.into_iter().collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let n = terms.len();
        let mut anti_commutes = vec![vec![false; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    anti_commutes[i][j] = !terms[i].0.commutes_with(terms[j].0);
                }
            }
        }
        let degree: Vec<usize> =
            (0..n).map(|i| anti_commutes[i].iter().filter(|&&x| x).count()).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| degree[b].cmp(&degree[a]).then(a.cmp(&b)));

        let mut color = vec![usize::MAX; n];
        let mut color_count = 0;
        for &vertex in &order {
            let mut candidate = 0;
            while (0..n).any(|other| anti_commutes[vertex][other] && color[other] == candidate) {
                candidate += 1;
            }
            color[vertex] = candidate;
            color_count = color_count.max(candidate + 1);
        }

        let mut group_terms: Vec<PauliCombination> = vec![PauliCombination::new(); color_count];
        for (idx, (pauli, coef)) in terms.into_iter().enumerate() {
            group_terms[color[idx]].add(pauli, coef);
        }
        let groups: Vec<Group> = group_terms.into_iter().map(Group::new).collect();

        tracing::debug!(terms = n, groups = groups.len(), "grouped Hamiltonian by commutativity");
        Hamiltonian { groups }
    }

    /// The Hamiltonian's mutually-commuting groups, in coloring order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pauli::Matrix;

    #[test]
    fn strings_within_one_group_pairwise_commute() {
        let x0 = PauliString::single(0, Matrix::X);
        let z0 = PauliString::single(0, Matrix::Z);
        let y0 = PauliString::single(0, Matrix::Y);
        let x1 = PauliString::single(1, Matrix::X);
        let sum = PauliCombination::from_iter([
            (x0, Scalar::one()),
            (z0, Scalar::one()),
            (y0, Scalar::one()),
            (x1, Scalar::one()),
        ]);
        let hamiltonian = Hamiltonian::new(sum);
        for group in hamiltonian.groups() {
            let members: Vec<PauliString> = group.base_strings().keys().copied().collect();
            for &a in &members {
                for &b in &members {
                    assert!(a.commutes_with(b));
                }
            }
        }
    }

    #[test]
    fn all_pairwise_anticommuting_terms_form_singleton_groups() {
        let x0 = PauliString::single(0, Matrix::X);
        let z0 = PauliString::single(0, Matrix::Z);
        let y0 = PauliString::single(0, Matrix::Y);
        let sum = PauliCombination::from_iter([
            (x0, Scalar::one()),
            (z0, Scalar::one()),
            (y0, Scalar::one()),
        ]);
        let hamiltonian = Hamiltonian::new(sum);
        assert_eq!(hamiltonian.groups().len(), 3);
        for group in hamiltonian.groups() {
            assert_eq!(group.base_strings().len(), 1);
        }
    }

    #[test]
    fn empty_hamiltonian_has_no_groups() {
        let hamiltonian = Hamiltonian::new(PauliCombination::new());
        assert!(hamiltonian.groups().is_empty());
    }

    #[test]
    fn period_length_is_at_least_one_for_every_group() {
        let x0x1 =
            PauliString::single(0, Matrix::X).combine(PauliString::single(1, Matrix::X));
        let z0 = PauliString::single(0, Matrix::Z);
        let sum = PauliCombination::from_iter([(x0x1, Scalar::one()), (z0, Scalar::one())]);
        let hamiltonian = Hamiltonian::new(sum);
        assert_eq!(hamiltonian.groups().len(), 2);
        for group in hamiltonian.groups() {
            assert!(group.period_length() >= 1);
        }
    }
}
