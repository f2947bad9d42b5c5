//! Arithmetic in a prime field with a runtime modulus.
//!
//! A [`PrimeField`] holds the modulus `p` and hands out [`FieldElement`]s,
//! integers confined to `[0, p)`. Elements keep a reference to their field
//! so that every operation can reduce its result and so that elements of
//! different fields are never silently mixed.
use std::{
    fmt,
    mem,
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand_core::RngCore;
use zeroize::Zeroize;

use crate::Error;

/// A prime field `Z/pZ`.
///
/// The modulus is not tested for primality so that small composite moduli
/// can be used in tests. Inversion checks `gcd(a, p) = 1` and fails for
/// elements without an inverse.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: Arc<BigUint>,
}

impl PrimeField {
    /// Creates a new field with the given modulus.
    pub fn new(modulus: BigUint) -> Result<Self, Error> {
        if modulus < BigUint::from(2u8) {
            return Err(Error::InvalidModulus);
        }

        Ok(Self {
            modulus: Arc::new(modulus),
        })
    }

    /// Returns the modulus of the field.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns the size of the byte representation of an element.
    pub fn byte_size(&self) -> usize {
        (self.modulus.bits() as usize + 7) / 8
    }

    /// Returns the additive identity.
    pub fn zero(&self) -> FieldElement {
        self.wrap(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one(&self) -> FieldElement {
        self.element(BigUint::one())
    }

    /// Creates an element from a non-negative integer, reducing it modulo `p`.
    pub fn element(&self, value: BigUint) -> FieldElement {
        self.wrap(value % self.modulus.as_ref())
    }

    /// Creates an element from an unsigned integer, reducing it modulo `p`.
    pub fn element_from_u64(&self, value: u64) -> FieldElement {
        self.element(BigUint::from(value))
    }

    /// Creates an element from a signed integer. Negative values are mapped
    /// to their additive inverse in the field.
    pub fn element_from_i64(&self, value: i64) -> FieldElement {
        let magnitude = self.element(BigUint::from(value.unsigned_abs()));
        match value.is_negative() {
            false => magnitude,
            true => -magnitude,
        }
    }

    /// Creates an element from an integer that must already be reduced.
    ///
    /// Fails with [`Error::OutOfRange`] if the value is not smaller than
    /// the modulus.
    pub fn canonical_element(&self, value: BigUint) -> Result<FieldElement, Error> {
        if &value >= self.modulus.as_ref() {
            return Err(Error::OutOfRange);
        }
        Ok(self.wrap(value))
    }

    /// Creates an element from its fixed-width big-endian representation.
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<FieldElement, Error> {
        if bytes.len() != self.byte_size() {
            return Err(Error::InvalidEncoding);
        }
        self.canonical_element(BigUint::from_bytes_be(bytes))
    }

    /// Returns an element drawn uniformly at random from `[0, p)`.
    pub fn random(&self, rng: &mut impl RngCore) -> FieldElement {
        let value = rng.gen_biguint_below(&self.modulus);
        self.wrap(value)
    }

    /// Returns an element drawn uniformly at random from `[1, p)`.
    pub fn random_nonzero(&self, rng: &mut impl RngCore) -> FieldElement {
        let value = rng.gen_biguint_range(&BigUint::one(), &self.modulus);
        self.wrap(value)
    }

    fn wrap(&self, value: BigUint) -> FieldElement {
        debug_assert!(&value < self.modulus.as_ref());
        FieldElement {
            value,
            field: self.clone(),
        }
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeField")
            .field("bits", &self.modulus.bits())
            .finish()
    }
}

/// An element of a [`PrimeField`].
///
/// Elements are immutable, every arithmetic operation returns a new element.
/// Two elements are equal only if they share both the value and the modulus.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    field: PrimeField,
}

impl FieldElement {
    /// Returns the canonical integer representative in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Returns the field the element belongs to.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Returns true iff the element is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns a copy of the canonical integer representative.
    pub fn to_biguint(&self) -> BigUint {
        self.value.clone()
    }

    /// Returns the fixed-width big-endian representation of the element.
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.field.byte_size();
        let value = self.value.to_bytes_be();
        let mut bytes = vec![0; size];
        // A zero value is encoded by `to_bytes_be` as a single zero byte.
        let value = &value[value.len().saturating_sub(size)..];
        bytes[size - value.len()..].copy_from_slice(value);
        bytes
    }

    /// Raises the element to the given power.
    pub fn pow(&self, exp: &BigUint) -> FieldElement {
        let value = self.value.modpow(exp, &self.field.modulus);
        self.field.wrap(value)
    }

    /// Returns the multiplicative inverse of the element.
    ///
    /// Uses the extended Euclidean algorithm, so it is correct for any
    /// modulus and fails with [`Error::NoInverse`] if the element is zero
    /// or shares a factor with the modulus.
    pub fn invert(&self) -> Result<FieldElement, Error> {
        if self.value.is_zero() {
            return Err(Error::NoInverse);
        }

        let p = BigInt::from(self.field.modulus().clone());
        let (mut r0, mut r1) = (p.clone(), BigInt::from(self.value.clone()));
        let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

        // Invariant: t_k * a = r_k (mod p).
        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            r0 = mem::replace(&mut r1, r2);
            let t2 = &t0 - &q * &t1;
            t0 = mem::replace(&mut t1, t2);
        }

        // r0 = gcd(a, p)
        if !r0.is_one() {
            return Err(Error::NoInverse);
        }

        let (_, value) = ((t0 % &p + &p) % &p).into_parts();
        Ok(self.field.wrap(value))
    }

    /// Divides the element by the given one.
    pub fn divide(&self, rhs: &FieldElement) -> Result<FieldElement, Error> {
        if self.field != rhs.field {
            return Err(Error::FieldMismatch);
        }
        Ok(self * &rhs.invert()?)
    }

    fn assert_same_field(&self, rhs: &FieldElement) {
        assert!(
            self.field == rhs.field,
            "field elements belong to different fields"
        );
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        wipe(&mut self.value);
    }
}

/// Overwrites the limbs of the integer in place before it is normalized
/// to zero.
pub(crate) fn wipe(value: &mut BigUint) {
    let limbs = (value.bits() as usize + 31) / 32;
    value.assign_from_slice(&vec![0u32; limbs]);
}

//
// Implementations of the `core::ops` traits.
//
// Mixing elements of different fields is a programming error.
//

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let mut value = &self.value + &rhs.value;
        if &value >= self.field.modulus() {
            value -= self.field.modulus();
        }
        self.field.wrap(value)
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        &self + rhs
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        &self + &rhs
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let value = match self.value >= rhs.value {
            true => &self.value - &rhs.value,
            false => self.field.modulus() - &rhs.value + &self.value,
        };
        self.field.wrap(value)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        &self - rhs
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        &self - &rhs
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        self.field.element(&self.value * &rhs.value)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        &self * rhs
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        &self * &rhs
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        match self.value.is_zero() {
            true => self.clone(),
            false => self.field.wrap(self.field.modulus() - &self.value),
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
