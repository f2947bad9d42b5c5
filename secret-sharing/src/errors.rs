#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("not distinct shares")]
    DuplicateShare,
    #[error("field mismatch")]
    FieldMismatch,
    #[error("invalid encoding")]
    InvalidEncoding,
    #[error("invalid modulus")]
    InvalidModulus,
    #[error("invalid threshold")]
    InvalidThreshold,
    #[error("not enough shares")]
    InsufficientShares,
    #[error("element not invertible")]
    NoInverse,
    #[error("value out of range")]
    OutOfRange,
    #[error("secret too large")]
    SecretTooLarge,
    #[error("too many shares")]
    TooManyShares,
    #[error("unknown mersenne exponent")]
    UnknownMersenneExponent,
    #[error("zero value shareholder")]
    ZeroCoordinate,
}
