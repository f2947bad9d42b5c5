//! # Secret Sharing
//!
//! This library provides functionality for secret sharing, a technique used
//! to distribute a secret among a group of participants in such a way that
//! only a threshold number of participants can recover the secret.
//!
//! All arithmetic happens in a prime field whose modulus is an explicit
//! configuration value (see [`config::Config`]), by default the Mersenne
//! prime `2^521 - 1`.
//!
//! ## Supported Schemes
//!
//! - Shamir (Shamir secret sharing)

pub mod codec;
pub mod config;
mod errors;
pub mod field;
pub mod logger;
pub mod poly;
pub mod shamir;

// Re-exports.
pub use self::errors::Error;
