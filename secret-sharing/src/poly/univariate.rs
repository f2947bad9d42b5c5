use std::fmt;

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{
    field::{FieldElement, PrimeField},
    Error,
};

/// Univariate polynomial over a prime field.
///
/// ```text
/// A(x) = \sum_{i=0}^{deg_x} a_i x^i
/// ```
///
/// The constant zero polynomial is represented by a vector with one zero
/// element, rather than by an empty vector.
///
/// Trailing zeros are never trimmed, so the number of coefficients fixed at
/// construction is the number of shares needed to interpolate the polynomial.
///
/// Coefficients are wiped when the polynomial is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    pub(crate) a: Vec<FieldElement>,
}

impl Polynomial {
    /// Creates a polynomial initialized to zero.
    pub fn zero(field: &PrimeField, deg: usize) -> Self {
        let a = vec![field.zero(); deg + 1];
        Self { a }
    }

    /// Creates a polynomial with random coefficients.
    pub fn random(field: &PrimeField, deg: usize, rng: &mut impl RngCore) -> Self {
        let mut a = Vec::with_capacity(deg + 1);
        for _ in 0..a.capacity() {
            let ai = field.random(&mut *rng);
            a.push(ai);
        }

        Self { a }
    }

    /// Creates a polynomial with the given coefficients.
    ///
    /// Fails with [`Error::FieldMismatch`] if a coefficient doesn't belong
    /// to the given field.
    pub fn with_coefficients(field: &PrimeField, a: Vec<FieldElement>) -> Result<Self, Error> {
        if a.iter().any(|ai| ai.field() != field) {
            return Err(Error::FieldMismatch);
        }
        if a.is_empty() {
            return Ok(Self::zero(field, 0));
        }

        Ok(Self { a })
    }

    /// Sets the coefficient `a_i` that belongs to the term `x^i`.
    ///
    /// If the coefficient does not exist, this is a no-op.
    pub fn set_coefficient(&mut self, i: usize, ai: FieldElement) -> bool {
        if let Some(old_ai) = self.a.get_mut(i) {
            debug_assert!(old_ai.field() == ai.field());
            old_ai.zeroize();
            *old_ai = ai;
            return true;
        }
        false
    }

    /// Returns the number of coefficients in the polynomial.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Returns the degree of the polynomial, counting trailing zeros.
    pub fn degree(&self) -> usize {
        self.a.len() - 1
    }

    /// Returns the i-th coefficient of the polynomial.
    pub fn coefficient(&self, i: usize) -> Option<&FieldElement> {
        self.a.get(i)
    }

    /// Returns the field of the coefficients.
    pub fn field(&self) -> &PrimeField {
        self.a[0].field()
    }

    /// Evaluates the polynomial using Horner's method.
    ///
    /// # Panics
    ///
    /// Panics if the point doesn't belong to the field of the polynomial.
    pub fn eval(&self, x: &FieldElement) -> FieldElement {
        let mut r = self.field().zero();
        for ai in self.a.iter().rev() {
            r = &(&r * x) + ai;
        }

        r
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        self.a.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.zeroize();
    }
}
