use slog::{debug, warn};

use crate::{
    field::FieldElement,
    logger::get_logger,
    poly::{lagrange, Point},
    Error,
};

use super::dealer::distinct_values;

/// A constructor of the shared secret.
pub struct Player {
    threshold: usize,
    logger: slog::Logger,
}

impl Player {
    /// Creates a new player which requires `threshold` shares to
    /// reconstruct the secret.
    pub fn new(threshold: usize) -> Self {
        Player {
            threshold,
            logger: get_logger("shamir/player"),
        }
    }

    /// Returns the number of shares needed to reconstruct the secret.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Reconstructs the secret from the provided shares.
    ///
    /// The secret is the value of the interpolated polynomial at zero.
    pub fn reconstruct_secret(&self, shares: &[Point]) -> Result<FieldElement, Error> {
        let required_shares = self.threshold.max(1);
        if shares.len() < required_shares {
            warn!(self.logger, "Not enough shares to reconstruct the secret";
                "shares" => shares.len(),
                "threshold" => required_shares,
            );
            return Err(Error::InsufficientShares);
        }

        let field = shares[0].field();
        if shares.iter().any(|p| p.field() != field) {
            return Err(Error::FieldMismatch);
        }
        if shares.iter().any(|p| p.x.is_zero()) {
            return Err(Error::ZeroCoordinate);
        }
        if !Self::distinct_shares(shares) {
            warn!(self.logger, "Shares with duplicate coordinates";
                "shares" => shares.len(),
            );
            return Err(Error::DuplicateShare);
        }

        let xs: Vec<_> = shares.iter().map(|p| p.x.clone()).collect();
        let cs = lagrange::coefficients(&xs)?;
        let secret = cs
            .iter()
            .zip(shares)
            .fold(field.zero(), |acc, (c, p)| &acc + &(&p.y * c));

        debug!(self.logger, "Reconstructed secret";
            "shares" => shares.len(),
            "threshold" => required_shares,
        );

        Ok(secret)
    }

    /// Returns true if shares are from distinct shareholders.
    fn distinct_shares(shares: &[Point]) -> bool {
        distinct_values(shares.iter().map(|p| &p.x))
    }
}
