//! Encore core: roles, feature keys, entitlements, and the shared error type.
//!
//! These are the typed inputs of every access decision. The crate carries no
//! policy tables of its own so the same vocabulary can be shared by the
//! policy crate, the check tooling, and callers that only need feature gates.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed role or feature strings surface as `EncoreError` instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod feature;
pub mod role;

/// Shared result type.
pub use error::{Result, EncoreError};
pub use feature::{is_feature_enabled, Entitlements, FeatureKey};
pub use role::Role;
