/*!
A narrow, closed-form symbolic scalar.

The evolution stepper in [crate::evolution] never needs a general computer-algebra
system: every coefficient it ever produces is a finite sum of terms of the form
`coeff * tau^power * exp(exponent * tau)`, where `tau` is the single free variable
introduced by [crate::evolution::EvolutionCalculator] and `coeff`/`exponent` are
rational-complex constants built up from Hamiltonian coefficients and phase factors.
Representing coefficients and exponents as exact rationals (rather than floats) keeps
the zero-test and the equality check exact, which the stepper's normalization step
depends on.

This is the "minimal hand-rolled representation...recommended for tight control of
equality and zero-testing" rather than a dependency on a full CAS.
*/

use std::{
    fmt,
    ops::{
        Add,
        Mul,
        Neg,
        Sub,
    },
};

use num_complex::Complex;
use num_rational::Ratio;
use num_traits::{
    One,
    Zero,
};
use thiserror::Error;

/// An exact rational-complex number: both the real and imaginary part are exact
/// rationals, so equality and zero-tests are decidable rather than approximate.
pub type RComplex = Complex<Ratio<i64>>;

/// Build a [RComplex] from two integers.
pub fn rc(re: i64, im: i64) -> RComplex {
    Complex::new(Ratio::from_integer(re), Ratio::from_integer(im))
}

pub(crate) fn half() -> RComplex {
    Complex::new(Ratio::new(1, 2), Ratio::from_integer(0))
}

fn to_f64(c: RComplex) -> Complex<f64> {
    Complex::new(
        *c.re.numer() as f64 / *c.re.denom() as f64,
        *c.im.numer() as f64 / *c.im.denom() as f64,
    )
}

/// The error surfaced when a [Scalar] operation has no closed form in this
/// representation.
///
/// Per the error-handling policy for the symbolic layer, this is fatal for the
/// current invocation: there is no retry or partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// `exp`/`sin`/`cos` were applied to a scalar that is not a bare linear monomial
    /// in `tau` (the only shape the stepper ever feeds them).
    #[error("{0} has no closed form for this scalar; expected a bare linear term in tau")]
    NonClosedForm(&'static str),
    /// Division by the exact-zero scalar.
    #[error("division by the zero scalar")]
    DivisionByZero,
    /// Division by a scalar that still depends on `tau`.
    #[error("division is only defined for a tau-free (constant) divisor")]
    NonConstantDivisor,
}

/// One monomial `coeff * tau^power * exp(exponent * tau)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Term {
    coeff: RComplex,
    power: u32,
    exponent: RComplex,
}

fn sort_key(t: &Term) -> (u32, i64, i64, i64, i64) {
    (t.power, *t.exponent.re.numer(), *t.exponent.re.denom(), *t.exponent.im.numer(), *t.exponent.im.denom())
}

/// A closed-form scalar value: a finite sum of [Term]s.
///
/// Two `Scalar`s that are mathematically equal always compare equal, because terms
/// are kept merged (by `(power, exponent)`) and sorted into a canonical order, and
/// exact-zero terms are dropped eagerly.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Scalar {
    terms: Vec<Term>,
}

impl Scalar {
    fn with_terms(terms: Vec<Term>) -> Self {
        let mut merged: Vec<Term> = Vec::with_capacity(terms.len());
        for t in terms {
            if t.coeff.is_zero() {
                continue;
            }
            if let Some(existing) =
                merged.iter_mut().find(|m| m.power == t.power && m.exponent == t.exponent)
            {
                existing.coeff += t.coeff;
            } else {
                merged.push(t);
            }
        }
        merged.retain(|t| !t.coeff.is_zero());
        merged.sort_by_key(sort_key);
        Scalar { terms: merged }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Scalar { terms: Vec::new() }
    }

    /// Whether this scalar is exactly zero (not just numerically close to it).
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::constant(RComplex::one())
    }

    /// A constant (tau-free) scalar.
    pub fn constant(c: RComplex) -> Self {
        Self::with_terms(vec![Term { coeff: c, power: 0, exponent: RComplex::zero() }])
    }

    /// The scalar for the integer `n`.
    pub fn from_integer(n: i64) -> Self {
        Self::constant(rc(n, 0))
    }

    /// The imaginary unit `i`.
    pub fn imaginary_unit() -> Self {
        Self::constant(rc(0, 1))
    }

    /// The free variable `tau` itself, not (yet) exponentiated.
    pub fn tau() -> Self {
        Scalar { terms: vec![Term { coeff: RComplex::one(), power: 1, exponent: RComplex::zero() }] }
    }

    /// Complex conjugation. `tau` is assumed real, so conjugating `exp(c * tau)`
    /// conjugates only `c`.
    pub fn conj(&self) -> Self {
        Scalar {
            terms: self
                .terms
                .iter()
                .map(|t| Term { coeff: t.coeff.conj(), power: t.power, exponent: t.exponent.conj() })
                .collect(),
        }
    }

    /// Scale every term's coefficient by a constant factor.
    pub fn scale(&self, factor: RComplex) -> Self {
        if factor.is_zero() {
            return Scalar::zero();
        }
        Self::with_terms(
            self.terms
                .iter()
                .map(|t| Term { coeff: t.coeff * factor, power: t.power, exponent: t.exponent })
                .collect(),
        )
    }

    /// `exp(self)`, in closed form.
    ///
    /// This is only defined when `self` is the zero scalar (`exp(0) = 1`) or a bare
    /// linear monomial `c * tau` (`exp(c * tau)`), which is the only shape the
    /// stepper ever builds before calling `exp`. Anything else -- for example a
    /// scalar that is already itself a sum of exponentials -- has no closed form in
    /// this representation and is a symbolic evaluation failure.
    pub fn exp(&self) -> Result<Self, ScalarError> {
        if self.is_zero() {
            return Ok(Self::one());
        }
        if self.terms.len() == 1 {
            let t = self.terms[0];
            if t.power == 1 && t.exponent.is_zero() {
                return Ok(Scalar { terms: vec![Term { coeff: RComplex::one(), power: 0, exponent: t.coeff }] });
            }
        }
        Err(ScalarError::NonClosedForm("exp"))
    }

    /// `cos(self)`, via `(exp(i*self) + exp(-i*self)) / 2`. Closed form under the
    /// same restriction as [Self::exp].
    pub fn cos(&self) -> Result<Self, ScalarError> {
        let i = Self::imaginary_unit();
        let pos = (i.clone() * self.clone()).exp()?;
        let neg = (-(i * self.clone())).exp()?;
        Ok((pos + neg).scale(half()))
    }

    /// `sin(self)`, via `(exp(i*self) - exp(-i*self)) / (2i)`. Closed form under the
    /// same restriction as [Self::exp].
    pub fn sin(&self) -> Result<Self, ScalarError> {
        let i = Self::imaginary_unit();
        let pos = (i.clone() * self.clone()).exp()?;
        let neg = (-(i * self.clone())).exp()?;
        // 1 / (2i) == -i/2
        Ok((pos - neg).scale(rc(0, -1) * half()))
    }

    /// Divide by a tau-free, nonzero scalar.
    pub fn div_constant(&self, divisor: &Self) -> Result<Self, ScalarError> {
        if divisor.terms.len() != 1 {
            return Err(ScalarError::NonConstantDivisor);
        }
        let t = divisor.terms[0];
        if t.power != 0 || !t.exponent.is_zero() {
            return Err(ScalarError::NonConstantDivisor);
        }
        if t.coeff.is_zero() {
            return Err(ScalarError::DivisionByZero);
        }
        Ok(self.scale(t.coeff.inv()))
    }

    /// Substitute a concrete real value for `tau` and evaluate to a numeric complex
    /// value. Since `tau` is this representation's only free variable, binding it is
    /// equivalent to the "evaluate to `complex<double>` once all free variables are
    /// bound" operation -- there is nothing left to substitute afterwards.
    pub fn substitute_tau(&self, tau: f64) -> Complex<f64> {
        let mut acc = Complex::new(0.0, 0.0);
        for t in &self.terms {
            let coeff = to_f64(t.coeff);
            let exponent = to_f64(t.exponent);
            let power_factor = tau.powi(t.power as i32);
            acc += coeff * power_factor * (exponent * tau).exp();
        }
        acc
    }
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Self) -> Self::Output {
        let mut terms = self.terms;
        terms.extend(rhs.terms);
        Self::with_terms(terms)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Self::Output {
        Scalar { terms: self.terms.into_iter().map(|t| Term { coeff: -t.coeff, ..t }).collect() }
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut terms = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for a in &self.terms {
            for b in &rhs.terms {
                terms.push(Term {
                    coeff: a.coeff * b.coeff,
                    power: a.power + b.power,
                    exponent: a.exponent + b.exponent,
                });
            }
        }
        Self::with_terms(terms)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (idx, t) in self.terms.iter().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({})", t.coeff)?;
            if t.power > 0 {
                write!(f, "*tau^{}", t.power)?;
            }
            if !t.exponent.is_zero() {
                write!(f, "*exp(({})*tau)", t.exponent)?;
            }
        }
        Ok(())
    }
}
