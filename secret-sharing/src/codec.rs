//! Conversion between secret byte strings and field elements.
use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::{
    field::{wipe, FieldElement, PrimeField},
    Error,
};

/// Byte prepended to every secret before packing, so that leading zero
/// bytes of the secret survive the conversion to an integer.
const LENGTH_MARKER: u8 = 0x01;

/// Interprets the bytes as a big-endian unsigned integer.
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Returns the minimal big-endian representation of the integer.
///
/// Zero is represented by a single zero byte.
pub fn int_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Encodes secrets as elements of a prime field and back.
///
/// A secret `s` is encoded as the big-endian integer `0x01 || s`.
#[derive(Clone, Debug)]
pub struct SecretCodec {
    field: PrimeField,
}

impl SecretCodec {
    /// Creates a new codec for the given field.
    pub fn new(field: PrimeField) -> Self {
        Self { field }
    }

    /// Returns the field used by the codec.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Returns the length of the longest secret that can always be encoded.
    ///
    /// Longer secrets may still fit if their encoding is smaller than
    /// the modulus.
    pub fn max_secret_len(&self) -> usize {
        // The encoding of an n-byte secret is at most 2^(8n+1) - 1.
        (self.field.modulus().bits() as usize).saturating_sub(2) / 8
    }

    /// Encodes the secret as a field element.
    ///
    /// Fails with [`Error::SecretTooLarge`] if the encoding is not smaller
    /// than the modulus.
    pub fn encode(&self, secret: &[u8]) -> Result<FieldElement, Error> {
        let mut packed = Vec::with_capacity(secret.len() + 1);
        packed.push(LENGTH_MARKER);
        packed.extend_from_slice(secret);

        let mut value = int_from_bytes(&packed);
        packed.zeroize();

        if &value >= self.field.modulus() {
            wipe(&mut value);
            return Err(Error::SecretTooLarge);
        }

        self.field.canonical_element(value)
    }

    /// Decodes a field element produced by [`SecretCodec::encode`].
    pub fn decode(&self, element: &FieldElement) -> Result<Vec<u8>, Error> {
        if element.field() != &self.field {
            return Err(Error::FieldMismatch);
        }

        let mut packed = int_to_bytes(element.value());
        let secret = match packed.split_first() {
            Some((&LENGTH_MARKER, secret)) => Ok(secret.to_vec()),
            _ => Err(Error::InvalidEncoding),
        };
        packed.zeroize();

        secret
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use crate::{config::mersenne_prime, field::PrimeField, Error};

    use super::{int_from_bytes, int_to_bytes, SecretCodec};

    fn codec(exponent: u32) -> SecretCodec {
        SecretCodec::new(PrimeField::new(mersenne_prime(exponent)).unwrap())
    }

    #[test]
    fn test_int_from_bytes() {
        assert_eq!(int_from_bytes(b""), BigUint::from(0u8));
        assert_eq!(int_from_bytes(b"xyz"), BigUint::from(0x78797au32));
        assert_eq!(int_from_bytes(&[0, 0, 1, 0]), BigUint::from(256u32));
        assert_eq!(int_to_bytes(&BigUint::from(0x78797au32)), b"xyz");
        assert_eq!(int_to_bytes(&BigUint::from(0u8)), vec![0]);
    }

    #[test]
    fn test_encode() {
        let codec = codec(127);
        let element = codec.encode(b"xyz").unwrap();
        assert_eq!(element.value(), &BigUint::from(0x0178797au32));

        let element = codec.encode(b"").unwrap();
        assert_eq!(element.value(), &BigUint::from(1u8));
    }

    #[test]
    fn test_round_trip() {
        let codec = codec(521);
        let secrets: [&[u8]; 5] = [b"", b"xyz", &[0], &[0, 0, 7], &[0xff; 64]];

        for secret in secrets {
            let element = codec.encode(secret).unwrap();
            let decoded = codec.decode(&element).unwrap();
            assert_eq!(decoded, secret);
        }
    }

    #[test]
    fn test_max_secret_len() {
        assert_eq!(codec(521).max_secret_len(), 64);

        let small = codec(127);
        assert_eq!(small.max_secret_len(), 15);
        assert!(small.encode(&[0xff; 15]).is_ok());
        assert_eq!(
            small.encode(&[0xff; 16]).unwrap_err(),
            Error::SecretTooLarge
        );

        let tiny = SecretCodec::new(PrimeField::new(BigUint::from(2u8)).unwrap());
        assert_eq!(tiny.max_secret_len(), 0);
        assert!(tiny.encode(b"").is_ok());
    }

    #[test]
    fn test_secret_too_large() {
        let codec = codec(31);
        assert!(codec.encode(b"xyz").is_ok());
        assert_eq!(
            codec.encode(b"wxyz").unwrap_err(),
            Error::SecretTooLarge
        );
    }

    #[test]
    fn test_decode_invalid() {
        let codec = codec(127);
        let field = codec.field().clone();

        let res = codec.decode(&field.zero());
        assert_eq!(res.unwrap_err(), Error::InvalidEncoding);

        let res = codec.decode(&field.element_from_u64(0x0278));
        assert_eq!(res.unwrap_err(), Error::InvalidEncoding);

        let other = PrimeField::new(mersenne_prime(61)).unwrap();
        let res = codec.decode(&other.one());
        assert_eq!(res.unwrap_err(), Error::FieldMismatch);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::{config::mersenne_prime, field::PrimeField};

    use super::SecretCodec;

    proptest! {
        #[test]
        fn prop_round_trip(secret in proptest::collection::vec(any::<u8>(), 0..=64)) {
            let codec = SecretCodec::new(PrimeField::new(mersenne_prime(521)).unwrap());
            let element = codec.encode(&secret).unwrap();
            prop_assert!(element.value() < codec.field().modulus());
            prop_assert_eq!(codec.decode(&element).unwrap(), secret);
        }
    }
}
