//! Shamir secret sharing.

mod dealer;
mod player;
mod scheme;
mod share_set;

// Re-exports.
pub use self::{dealer::*, player::*, scheme::*, share_set::*};
