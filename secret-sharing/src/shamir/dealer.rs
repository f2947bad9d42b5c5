use std::collections::HashSet;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use slog::{debug, info};

use crate::{
    field::{FieldElement, PrimeField},
    logger::get_logger,
    poly::{Point, Polynomial},
    Error,
};

/// A holder of the secret-sharing polynomial responsible for generating
/// secret shares.
pub struct Dealer {
    /// The secret-sharing polynomial where the coefficient of the constant
    /// term represents the shared secret.
    poly: Polynomial,
    logger: slog::Logger,
}

impl Dealer {
    /// Creates a new dealer with a predefined shared secret.
    ///
    /// Any `threshold` of the shares made by the dealer suffice to
    /// reconstruct the secret, so the polynomial has degree `threshold - 1`.
    pub fn new<R>(threshold: usize, secret: FieldElement, rng: &mut R) -> Result<Self, Error>
    where
        R: RngCore + CryptoRng,
    {
        if threshold == 0 {
            return Err(Error::InvalidThreshold);
        }

        let mut poly = Polynomial::random(secret.field(), threshold - 1, rng);
        poly.set_coefficient(0, secret);
        let logger = get_logger("shamir/dealer");

        Ok(Self { poly, logger })
    }

    /// Returns the number of shares needed to reconstruct the secret.
    pub fn threshold(&self) -> usize {
        self.poly.size()
    }

    /// Returns the field of the secret-sharing polynomial.
    pub fn field(&self) -> &PrimeField {
        self.poly.field()
    }

    /// Generates shares of the secret for the given shareholders.
    ///
    /// Fails if any x-coordinate is zero or repeated.
    pub fn make_shares(&self, xs: Vec<FieldElement>) -> Result<Vec<Point>, Error> {
        if !distinct_values(&xs) {
            return Err(Error::DuplicateShare);
        }

        let mut shares = Vec::with_capacity(xs.len());
        for x in xs {
            let share = self.make_share(x)?;
            shares.push(share);
        }
        Ok(shares)
    }

    /// Generates a share of the secret for the given shareholder.
    ///
    /// The share at zero would be the secret itself and is therefore
    /// rejected.
    pub fn make_share(&self, x: FieldElement) -> Result<Point, Error> {
        if x.field() != self.field() {
            return Err(Error::FieldMismatch);
        }
        if x.is_zero() {
            return Err(Error::ZeroCoordinate);
        }

        let y = self.poly.eval(&x);
        Point::new(x, y)
    }

    /// Generates `n` shares at distinct, nonzero, random x-coordinates.
    pub fn make_random_shares<R>(&self, n: usize, rng: &mut R) -> Result<Vec<Point>, Error>
    where
        R: RngCore + CryptoRng,
    {
        if n < self.threshold() {
            return Err(Error::InvalidThreshold);
        }
        // There are only p - 1 nonzero points.
        if &BigUint::from(n) >= self.field().modulus() {
            return Err(Error::TooManyShares);
        }

        let mut seen = HashSet::with_capacity(n);
        let mut xs = Vec::with_capacity(n);
        let mut redraws = 0usize;
        while xs.len() < n {
            let x = self.field().random_nonzero(&mut *rng);
            if !seen.insert(x.value().clone()) {
                redraws += 1;
                continue;
            }
            xs.push(x);
        }

        if redraws > 0 {
            debug!(self.logger, "Redrew colliding share coordinates";
                "redraws" => redraws,
            );
        }

        let shares = self.make_shares(xs)?;

        info!(self.logger, "Generated secret shares";
            "shares" => n,
            "threshold" => self.threshold(),
        );

        Ok(shares)
    }
}

/// Splits the secret into `n` shares, any `t` of which reconstruct it.
///
/// Fails with [`Error::InvalidThreshold`] unless `1 <= t <= n`.
pub fn generate<R>(secret: FieldElement, n: usize, t: usize, rng: &mut R) -> Result<Vec<Point>, Error>
where
    R: RngCore + CryptoRng,
{
    if t == 0 || t > n {
        return Err(Error::InvalidThreshold);
    }

    let dealer = Dealer::new(t, secret, rng)?;
    dealer.make_random_shares(n, rng)
}

/// Returns true if all elements are distinct.
pub(crate) fn distinct_values<'a>(xs: impl IntoIterator<Item = &'a FieldElement>) -> bool {
    let mut seen = HashSet::new();
    xs.into_iter().all(|x| seen.insert(x.value()))
}
