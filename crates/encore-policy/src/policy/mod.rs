//! Route authorization policy.
//!
//! Compiles a route table into a most-specific-first rule list that the
//! navigation layer queries before every transition. Unmatched or malformed
//! paths are denied.

pub mod builtin;
pub mod engine;
pub mod pattern;

use std::sync::OnceLock;

use encore_core::Role;

pub use engine::{AccessDecision, AccessRule, DenyReason, RouteAccessPolicy, RuleDef};
pub use pattern::{RoutePattern, Specificity};

static BUILTIN: OnceLock<Option<RouteAccessPolicy>> = OnceLock::new();

/// Process-wide builtin policy, compiled on first use.
///
/// `None` only if the builtin table fails validation; every check then denies.
pub fn builtin_policy() -> Option<&'static RouteAccessPolicy> {
    BUILTIN
        .get_or_init(|| match RouteAccessPolicy::builtin() {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::error!(error = %e, "builtin route table rejected, denying all routes");
                None
            }
        })
        .as_ref()
}

/// Route check against the builtin table.
pub fn can_role_access(path: &str, role: Role) -> bool {
    builtin_policy().is_some_and(|p| p.can_role_access(path, role))
}
