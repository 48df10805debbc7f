use std::collections::{BTreeSet, HashSet};

use encore_core::error::{EncoreError, Result};
use encore_core::{Entitlements, FeatureKey, Role};

use super::builtin;
use super::pattern::{normalize_path, RoutePattern, Specificity};
use crate::config::PolicyConfig;

/// Uncompiled rule as authored in the builtin table or a config file.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef<'a> {
    pub pattern: &'a str,
    pub roles: &'a [Role],
    pub feature: Option<FeatureKey>,
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    MalformedPath,
    NoMatchingRule,
    RoleNotPermitted,
    FeatureDisabled(FeatureKey),
}

/// Outcome of a route check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenyReason),
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Compiled access rule.
#[derive(Debug, Clone)]
pub struct AccessRule {
    pattern: RoutePattern,
    specificity: Specificity,
    roles: BTreeSet<Role>,
    feature: Option<FeatureKey>,
}

impl AccessRule {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }
    pub fn feature(&self) -> Option<FeatureKey> {
        self.feature
    }
}

/// Route authorization policy.
/// Compile once at startup, then share by reference or Arc.
#[derive(Debug, Clone)]
pub struct RouteAccessPolicy {
    // most specific first
    rules: Vec<AccessRule>,
    landing: [String; Role::COUNT],
}

impl RouteAccessPolicy {
    /// Compile the table shipped with the app.
    pub fn builtin() -> Result<Self> {
        Self::compile(builtin::RULES, &[])
    }

    pub fn from_config(cfg: &PolicyConfig) -> Result<Self> {
        let defs: Vec<RuleDef<'_>> = cfg
            .routes
            .iter()
            .map(|r| RuleDef {
                pattern: &r.pattern,
                roles: &r.roles,
                feature: r.feature,
            })
            .collect();
        let landing: Vec<(Role, &str)> = cfg
            .landing
            .iter()
            .map(|(role, path)| (*role, path.as_str()))
            .collect();
        Self::compile(&defs, &landing)
    }

    /// Compile and validate a rule table.
    ///
    /// `landing` overrides the builtin landing path per role. Fails on an
    /// empty table, bad patterns, rules granting no role, duplicate
    /// patterns, or a landing path its own role cannot open.
    pub fn compile(defs: &[RuleDef<'_>], landing: &[(Role, &str)]) -> Result<Self> {
        if defs.is_empty() {
            return Err(EncoreError::InvalidConfig("route table must not be empty".into()));
        }

        let mut seen = HashSet::with_capacity(defs.len());
        let mut rules = Vec::with_capacity(defs.len());
        for def in defs {
            let pattern = RoutePattern::parse(def.pattern)?;
            if def.roles.is_empty() {
                return Err(EncoreError::InvalidConfig(format!(
                    "rule {} grants no roles",
                    def.pattern
                )));
            }
            // Distinct patterns never tie on a path, so duplicates are the
            // only possible ambiguity.
            if !seen.insert((pattern.segments().to_vec(), pattern.is_descendants())) {
                return Err(EncoreError::AmbiguousRule(format!(
                    "{} is declared more than once",
                    def.pattern
                )));
            }
            rules.push(AccessRule {
                specificity: pattern.specificity(),
                pattern,
                roles: def.roles.iter().copied().collect(),
                feature: def.feature,
            });
        }
        rules.sort_by(|a, b| b.specificity.cmp(&a.specificity));

        let mut paths = Role::ALL.map(|r| builtin::landing_path(r).to_string());
        for (role, path) in landing {
            paths[*role as usize] = (*path).to_string();
        }

        let policy = Self { rules, landing: paths };
        for role in Role::ALL {
            let path = policy.landing_path(role);
            if !policy.can_role_access(path, role) {
                return Err(EncoreError::InvalidConfig(format!(
                    "landing path {path} is not accessible to role {role}"
                )));
            }
        }

        tracing::debug!(rules = policy.rules.len(), "route access policy compiled");
        Ok(policy)
    }

    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Most specific rule covering `path`, if any.
    pub fn rule_for(&self, path: &str) -> Option<&AccessRule> {
        let segs = normalize_path(path)?;
        self.select(&segs)
    }

    fn select(&self, segs: &[&str]) -> Option<&AccessRule> {
        self.rules.iter().find(|r| r.pattern.matches(segs))
    }

    /// Route check by role alone. Feature requirements are not applied.
    pub fn decide(&self, path: &str, role: Role) -> AccessDecision {
        let Some(segs) = normalize_path(path) else {
            return AccessDecision::Denied(DenyReason::MalformedPath);
        };
        match self.select(&segs) {
            None => AccessDecision::Denied(DenyReason::NoMatchingRule),
            Some(rule) if rule.allows(role) => AccessDecision::Allowed,
            Some(_) => AccessDecision::Denied(DenyReason::RoleNotPermitted),
        }
    }

    /// Route check by role plus the feature the selected rule requires.
    pub fn decide_with_entitlements(
        &self,
        path: &str,
        role: Role,
        entitlements: &Entitlements,
    ) -> AccessDecision {
        let Some(segs) = normalize_path(path) else {
            return AccessDecision::Denied(DenyReason::MalformedPath);
        };
        let Some(rule) = self.select(&segs) else {
            return AccessDecision::Denied(DenyReason::NoMatchingRule);
        };
        if !rule.allows(role) {
            return AccessDecision::Denied(DenyReason::RoleNotPermitted);
        }
        match rule.feature {
            Some(key) if !entitlements.contains(key) => {
                AccessDecision::Denied(DenyReason::FeatureDisabled(key))
            }
            _ => AccessDecision::Allowed,
        }
    }

    pub fn can_role_access(&self, path: &str, role: Role) -> bool {
        self.decide(path, role).is_allowed()
    }

    /// Redirect target after a denied transition.
    pub fn landing_path(&self, role: Role) -> &str {
        &self.landing[role as usize]
    }

    /// Routes from `routes` that no rule covers.
    pub fn uncovered_routes<'a, I>(&self, routes: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        routes
            .into_iter()
            .filter(|r| self.rule_for(r).is_none())
            .collect()
    }
}
