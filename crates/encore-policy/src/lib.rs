//! Encore route access policy.
//!
//! Decides whether a role may open a route in the school app, and which
//! route a denied user lands on instead. The table is compiled once (from
//! the builtin rules or a YAML file) and consulted by the navigation layer
//! before every transition.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod policy;

pub use policy::{
    builtin_policy, can_role_access, AccessDecision, AccessRule, DenyReason, RouteAccessPolicy,
};
