use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::{
    field::{FieldElement, PrimeField},
    Error,
};

/// A point (x,y) on a univariate polynomial f(x), where y = f(x).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// The x-coordinate of the point.
    pub(crate) x: FieldElement,
    /// The y-coordinate of the point.
    pub(crate) y: FieldElement,
}

impl Point {
    /// Creates a new point.
    ///
    /// Fails with [`Error::FieldMismatch`] if the coordinates belong
    /// to different fields.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, Error> {
        if x.field() != y.field() {
            return Err(Error::FieldMismatch);
        }
        Ok(Self { x, y })
    }

    /// Creates a point from two integers, each of which must be smaller
    /// than the modulus.
    pub fn from_biguints(field: &PrimeField, x: BigUint, y: BigUint) -> Result<Self, Error> {
        let x = field.canonical_element(x)?;
        let y = field.canonical_element(y)?;
        Ok(Self { x, y })
    }

    /// Creates a point from its byte representation.
    pub fn from_bytes(field: &PrimeField, bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::byte_size(field) {
            return Err(Error::InvalidEncoding);
        }
        let (x, y) = bytes.split_at(field.byte_size());
        let x = field.element_from_bytes(x)?;
        let y = field.element_from_bytes(y)?;
        Ok(Self { x, y })
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Returns the field of the coordinates.
    pub fn field(&self) -> &PrimeField {
        self.x.field()
    }

    /// Returns both coordinates as integers.
    pub fn to_biguints(&self) -> (BigUint, BigUint) {
        (self.x.to_biguint(), self.y.to_biguint())
    }

    /// Returns the byte representation of the point, the fixed-width
    /// encoding of the x-coordinate followed by that of the y-coordinate.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.x.to_bytes();
        bytes.extend_from_slice(&self.y.to_bytes());
        bytes
    }

    /// Returns the size of the byte representation of a point.
    pub fn byte_size(field: &PrimeField) -> usize {
        2 * field.byte_size()
    }
}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}
