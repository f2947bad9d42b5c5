//! Lagrange interpolation.

mod naive;

// Re-exports.
pub use self::naive::*;
