//! Top-level facade crate for Encore access control.
//!
//! Re-exports the core vocabulary and the route policy so the app can depend
//! on a single crate.

pub mod core {
    pub use encore_core::*;
}

pub mod policy {
    pub use encore_policy::*;
}

pub use encore_core::{is_feature_enabled, Entitlements, FeatureKey, Role};
pub use encore_policy::{can_role_access, AccessDecision, DenyReason, RouteAccessPolicy};
