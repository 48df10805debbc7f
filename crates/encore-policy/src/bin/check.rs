//! Route table check.
//!
//! Loads a route table file, compiles it, and checks that every navigable
//! route is covered. Exits non-zero on any failure.
//!
//! Usage: `encore-policy-check [path]` (default `encore-policy.yaml`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use encore_policy::config;
use encore_policy::policy::builtin;
use encore_policy::RouteAccessPolicy;

const DEFAULT_PATH: &str = "encore-policy.yaml";

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());

    let policy = match config::load_from_file(&path).and_then(|cfg| RouteAccessPolicy::from_config(&cfg)) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "route table rejected");
            return ExitCode::FAILURE;
        }
    };

    let uncovered = policy.uncovered_routes(builtin::ROUTES.iter().copied());
    if !uncovered.is_empty() {
        for route in &uncovered {
            tracing::error!(%route, "route has no matching rule");
        }
        return ExitCode::FAILURE;
    }

    tracing::info!(%path, rules = policy.rules().len(), routes = builtin::ROUTES.len(), "route table ok");
    ExitCode::SUCCESS
}
