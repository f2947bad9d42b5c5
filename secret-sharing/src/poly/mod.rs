//! This package provides tools for working with polynomials over a prime
//! field.
//!
//! Features include:
//!
//! - Univariate polynomials
//! - Evaluation of points on polynomials
//! - Lagrange interpolation at zero

pub mod lagrange;
mod point;
mod univariate;

// Re-exports.
pub use self::{point::*, univariate::*};
