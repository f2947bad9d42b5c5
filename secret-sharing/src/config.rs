//! Secret sharing configuration.
use num_bigint::BigUint;
use num_traits::One;

use crate::{field::PrimeField, Error};

/// Exponents `k` for which `2^k - 1` is a known Mersenne prime and which
/// can be selected with [`Config::mersenne`].
pub const MERSENNE_EXPONENTS: [u32; 14] = [2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607];

/// Exponent of the Mersenne prime used when no modulus is configured.
pub const DEFAULT_MERSENNE_EXPONENT: u32 = 521;

/// Returns the Mersenne number `2^exponent - 1`.
pub fn mersenne_prime(exponent: u32) -> BigUint {
    (BigUint::one() << exponent) - 1u32
}

/// Secret sharing configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Modulus of the prime field in which shares are computed.
    ///
    /// Every encoded secret must be strictly smaller than the modulus.
    pub modulus: BigUint,
}

impl Config {
    /// Creates a configuration using the Mersenne prime `2^exponent - 1`.
    pub fn mersenne(exponent: u32) -> Result<Self, Error> {
        if !MERSENNE_EXPONENTS.contains(&exponent) {
            return Err(Error::UnknownMersenneExponent);
        }

        Ok(Self {
            modulus: mersenne_prime(exponent),
        })
    }

    /// Creates a configuration with an arbitrary modulus.
    pub fn with_modulus(modulus: BigUint) -> Self {
        Self { modulus }
    }

    /// Returns the prime field defined by the configured modulus.
    pub fn field(&self) -> Result<PrimeField, Error> {
        PrimeField::new(self.modulus.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modulus: mersenne_prime(DEFAULT_MERSENNE_EXPONENT),
        }
    }
}
