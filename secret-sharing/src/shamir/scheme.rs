use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::{codec::SecretCodec, config::Config, field::PrimeField, Error};

use super::{generate, Player, Share, ShareSet};

/// A `(t, n)` threshold scheme for byte-string secrets.
///
/// Secrets are encoded into the configured prime field, split into `n`
/// shares of which any `t` recover the secret.
#[derive(Clone, Debug)]
pub struct Scheme {
    codec: SecretCodec,
    threshold: usize,
    shares: usize,
}

impl Scheme {
    /// Creates a new scheme requiring `threshold` out of `shares` shares.
    pub fn new(config: &Config, threshold: usize, shares: usize) -> Result<Self, Error> {
        if threshold == 0 || threshold > shares {
            return Err(Error::InvalidThreshold);
        }

        let field = config.field()?;
        if &BigUint::from(shares) >= field.modulus() {
            return Err(Error::TooManyShares);
        }

        Ok(Self {
            codec: SecretCodec::new(field),
            threshold,
            shares,
        })
    }

    /// Returns the field in which shares are computed.
    pub fn field(&self) -> &PrimeField {
        self.codec.field()
    }

    /// Returns the number of shares needed to recover a secret.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of shares made for every secret.
    pub fn shares(&self) -> usize {
        self.shares
    }

    /// Returns the length of the longest secret that can always be split.
    pub fn max_secret_len(&self) -> usize {
        self.codec.max_secret_len()
    }

    /// Splits the secret into shares.
    pub fn split<R>(&self, secret: &[u8], rng: &mut R) -> Result<ShareSet, Error>
    where
        R: RngCore + CryptoRng,
    {
        let secret = self.codec.encode(secret)?;
        let shares = generate(secret, self.shares, self.threshold, rng)?;
        Ok(ShareSet::new(shares))
    }

    /// Recovers the secret from the given shares.
    pub fn recover(&self, shares: &[Share]) -> Result<Vec<u8>, Error> {
        let player = Player::new(self.threshold);
        let secret = player.reconstruct_secret(shares)?;
        self.codec.decode(&secret)
    }
}
