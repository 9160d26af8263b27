//! Cross-module algebraic invariants of the Pauli-string kernel (properties 1-7).

use num_complex::Complex;
use proptest::prelude::*;
use trotter_pauli::pauli::{
    Matrix,
    PauliString,
};

fn arbitrary_pauli_string() -> impl Strategy<Value = PauliString> {
    (0u32..64, 0u32..64).prop_flat_map(|(site_a, site_b)| {
        prop_oneof![
            Just(PauliString::single(site_a, Matrix::X)),
            Just(PauliString::single(site_a, Matrix::Y)),
            Just(PauliString::single(site_a, Matrix::Z)),
            Just(PauliString::single(site_b, Matrix::X)),
        ]
    })
}

#[test]
fn phase_adjustment_is_a_fourth_root_of_unity_for_every_matrix() {
    for matrix in [Matrix::I, Matrix::X, Matrix::Y, Matrix::Z] {
        let p = PauliString::single(0, matrix);
        let phase = p.phase_adjustment();
        assert_eq!(phase * phase * phase * phase, trotter_pauli::scalar::rc(1, 0));
    }
}

#[test]
fn support_size_matches_mask_to_vector_length() {
    let y = PauliString::single(7, Matrix::Y);
    assert_eq!(PauliString::mask_to_vector(y.sites()).len(), 1);
}

#[test]
fn polarize_all_ones_equals_phase_adjustment() {
    let y = PauliString::single(3, Matrix::Y);
    let polarized = y.polarize(1.0, 1.0, 1.0);
    let phase = y.phase_adjustment();
    let expected = Complex::new(*phase.re.numer() as f64, *phase.im.numer() as f64);
    assert!((polarized - expected).norm() < 1e-12);
}

proptest! {
    #[test]
    fn commutation_is_symmetric(a in arbitrary_pauli_string(), b in arbitrary_pauli_string()) {
        prop_assert_eq!(a.commutes_with(b), b.commutes_with(a));
    }

    #[test]
    fn every_pauli_string_commutes_with_itself(a in arbitrary_pauli_string()) {
        prop_assert!(a.commutes_with(a));
    }

    #[test]
    fn product_supports_match_and_sign_mirrors_commutation(
        a in arbitrary_pauli_string(),
        b in arbitrary_pauli_string(),
    ) {
        let (ab, sign_ab) = a.product(b);
        let (ba, sign_ba) = b.product(a);
        prop_assert_eq!(ab, ba);
        if a.commutes_with(b) {
            prop_assert_eq!(sign_ab, sign_ba);
        } else {
            prop_assert_eq!(sign_ab, -sign_ba);
        }
    }

    #[test]
    fn translate_then_untranslate_restores_the_original(site in 0u32..32, shift in -16i32..16) {
        let target = site as i32 + shift;
        prop_assume!((0..64).contains(&target));
        let p = PauliString::single(site, Matrix::Y);
        prop_assert_eq!(p.translate(shift).translate(-shift), p);
    }
}
