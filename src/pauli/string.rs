use std::fmt;

use num_complex::Complex;

use crate::scalar::{
    rc,
    RComplex,
};

/// The machine-word width of the lattice: the number of sites a single
/// [`PauliString`] can address.
pub const WORD_WIDTH: u32 = u64::BITS;

/// A bit mask selecting a subset of lattice sites.
pub type SiteMask = u64;

/// A single-site Pauli matrix, named by its symplectic encoding `(v, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matrix {
    /// `(v, w) = (0, 0)`.
    I,
    /// `(v, w) = (0, 1)`.
    X,
    /// `(v, w) = (1, 0)`.
    Z,
    /// `(v, w) = (1, 1)`.
    Y,
}

impl Matrix {
    fn symplectic(self) -> (u64, u64) {
        match self {
            Matrix::I => (0, 0),
            Matrix::X => (0, 1),
            Matrix::Z => (1, 0),
            Matrix::Y => (1, 1),
        }
    }

    /// Parse a single Pauli character (`'X'`, `'Y'`, `'Z'`); `'I'` is not accepted
    /// here since the textual Hamiltonian/observable literals never spell out
    /// identity sites explicitly (cf. [crate::parser]).
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Matrix::X),
            'Y' => Some(Matrix::Y),
            'Z' => Some(Matrix::Z),
            _ => None,
        }
    }
}

/// A bit-packed multi-qubit Pauli operator on up to [`WORD_WIDTH`] lattice sites.
///
/// Site `i` is encoded by bit `i` of each of two bit-vectors `v` and `w`:
/// `(v_i, w_i) = (0,0)→I, (0,1)→X, (1,0)→Z, (1,1)→Y`. Equality, hashing and the total
/// order are all defined lexicographically on `(v, w)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PauliString {
    v: u64,
    w: u64,
}

impl PauliString {
    /// The identity operator (`v = w = 0`).
    pub const IDENTITY: Self = PauliString { v: 0, w: 0 };

    /// The single-site operator placing `matrix` at `site` and identity elsewhere.
    ///
    /// # Panics
    /// Panics if `site >= WORD_WIDTH`.
    pub fn single(site: u32, matrix: Matrix) -> Self {
        assert!(site < WORD_WIDTH, "site {site} exceeds the {WORD_WIDTH}-qubit word width");
        let (v, w) = matrix.symplectic();
        PauliString { v: v << site, w: w << site }
    }

    /// Whether this is the identity operator.
    pub fn is_identity(self) -> bool {
        self.v == 0 && self.w == 0
    }

    /// The support mask `v | w`.
    pub fn sites(self) -> SiteMask {
        self.v | self.w
    }

    /// `φ(P) = i^(popcount(v & w) mod 4)`, the scalar that repairs the phase lost by
    /// the symplectic encoding (`Y = iXZ`).
    pub fn phase_adjustment(self) -> RComplex {
        match (self.v & self.w).count_ones() % 4 {
            0 => rc(1, 0),
            1 => rc(0, 1),
            2 => rc(-1, 0),
            _ => rc(0, -1),
        }
    }

    /// Whether `self` and `other` commute: `popcount(v1 & w2) + popcount(w1 & v2)` is
    /// even.
    pub fn commutes_with(self, other: Self) -> bool {
        ((self.v & other.w).count_ones() + (self.w & other.v).count_ones()) % 2 == 0
    }

    /// The symplectic product `self * other`, returning the resulting operator
    /// together with the `±1` swap sign from commuting `other`'s X-part past
    /// `self`'s Z-part. The `i`-factors carried by each operand's `Y`s are *not*
    /// folded in here; callers reconstruct the full phase via
    /// `sign · φ(result) · conj(φ(self)) · conj(φ(other))` where needed.
    pub fn product(self, other: Self) -> (Self, i64) {
        let result = PauliString { v: self.v ^ other.v, w: self.w ^ other.w };
        let sign = if (self.w & other.v).count_ones() % 2 == 0 { 1 } else { -1 };
        (result, sign)
    }

    /// Shift every occupied site by `shift` (left if `shift >= 0`, right otherwise).
    /// Sites shifted past bit 0 or bit `WORD_WIDTH - 1` are silently dropped; callers
    /// are responsible for keeping chains within the lattice width.
    pub fn translate(self, shift: i32) -> Self {
        let amount = shift.unsigned_abs();
        if shift >= 0 {
            PauliString { v: shl(self.v, amount), w: shl(self.w, amount) }
        } else {
            PauliString { v: shr(self.v, amount), w: shr(self.w, amount) }
        }
    }

    /// XOR-combine two operators' symplectic bits directly, without repairing phase.
    /// Used to build a multi-site operator out of single-site pieces (cf.
    /// [`super::ScaledPauliString::from_sites`]); the resulting phase is recovered
    /// separately via [`Self::phase_adjustment`].
    pub(crate) fn combine(self, other: Self) -> Self {
        PauliString { v: self.v ^ other.v, w: self.w ^ other.w }
    }

    /// List the set bits of `mask` in ascending order.
    pub fn mask_to_vector(mask: SiteMask) -> Vec<usize> {
        let mut sites = Vec::with_capacity(mask.count_ones() as usize);
        let mut remaining = mask;
        while remaining != 0 {
            sites.push(remaining.trailing_zeros() as usize);
            remaining &= remaining - 1;
        }
        sites
    }

    /// Evaluate the tensor expansion of `self` under the single-qubit substitution
    /// `I → 1, X → p_x, Y → p_y, Z → p_z`, scaled by [`Self::phase_adjustment`].
    pub fn polarize(self, p_x: f64, p_y: f64, p_z: f64) -> Complex<f64> {
        let phase = self.phase_adjustment();
        let mut result = Complex::new(
            *phase.re.numer() as f64 / *phase.re.denom() as f64,
            *phase.im.numer() as f64 / *phase.im.denom() as f64,
        );
        for site in Self::mask_to_vector(self.sites()) {
            let v_bit = (self.v >> site) & 1;
            let w_bit = (self.w >> site) & 1;
            let factor = match (v_bit, w_bit) {
                (0, 1) => p_x,
                (1, 0) => p_z,
                (1, 1) => p_y,
                _ => unreachable!("site is in sites(), so it cannot be identity"),
            };
            result *= factor;
        }
        result
    }
}

fn shl(bits: u64, amount: u32) -> u64 {
    bits.checked_shl(amount).unwrap_or(0)
}

fn shr(bits: u64, amount: u32) -> u64 {
    bits.checked_shr(amount).unwrap_or(0)
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "I");
        }
        let degree = (self.v & self.w).count_ones() % 4;
        write!(f, "{}", ["", "i*", "-", "-i*"][degree as usize])?;
        for site in Self::mask_to_vector(self.sites()) {
            let v_bit = (self.v >> site) & 1;
            let w_bit = (self.w >> site) & 1;
            let symbol = match (v_bit, w_bit) {
                (0, 1) => 'X',
                (1, 0) => 'Z',
                (1, 1) => 'Y',
                _ => unreachable!("site is in sites(), so it cannot be identity"),
            };
            write!(f, "{symbol}{site}")?;
        }
        Ok(())
    }
}
