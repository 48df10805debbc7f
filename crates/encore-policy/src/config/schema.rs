use std::collections::BTreeMap;

use serde::Deserialize;

use encore_core::error::{EncoreError, Result};
use encore_core::{FeatureKey, Role};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub version: u32,

    #[serde(default)]
    pub routes: Vec<RouteRuleConfig>,

    /// Per-role redirect target overrides.
    #[serde(default)]
    pub landing: BTreeMap<Role, String>,
}

impl PolicyConfig {
    /// Shape checks only. Pattern syntax, duplicates and landing
    /// reachability are checked when the policy is compiled.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EncoreError::UnsupportedVersion(self.version));
        }
        if self.routes.is_empty() {
            return Err(EncoreError::InvalidConfig("routes must not be empty".into()));
        }
        for (role, path) in &self.landing {
            if !path.starts_with('/') {
                return Err(EncoreError::InvalidConfig(format!(
                    "landing.{role} must be an absolute path"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteRuleConfig {
    pub pattern: String,
    pub roles: Vec<Role>,
    #[serde(default)]
    pub feature: Option<FeatureKey>,
}
