//! Subscription feature keys and per-org entitlements.
//!
//! Entitlements are derived from the org's plan by the data layer. This
//! module only answers membership questions over a set it is handed; it
//! never fetches or caches anything.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncoreError;

/// Gateable product feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKey {
    CalendarSync,
    ZoomIntegration,
    TeacherPerformanceReport,
    OnlinePayments,
    BulkImport,
    BulkMessaging,
    PracticeTracking,
    MultiLocation,
    ParentPortal,
    PayrollReport,
}

impl FeatureKey {
    pub const ALL: [FeatureKey; 10] = [
        FeatureKey::CalendarSync,
        FeatureKey::ZoomIntegration,
        FeatureKey::TeacherPerformanceReport,
        FeatureKey::OnlinePayments,
        FeatureKey::BulkImport,
        FeatureKey::BulkMessaging,
        FeatureKey::PracticeTracking,
        FeatureKey::MultiLocation,
        FeatureKey::ParentPortal,
        FeatureKey::PayrollReport,
    ];

    /// Wire name (kebab-case).
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::CalendarSync => "calendar-sync",
            FeatureKey::ZoomIntegration => "zoom-integration",
            FeatureKey::TeacherPerformanceReport => "teacher-performance-report",
            FeatureKey::OnlinePayments => "online-payments",
            FeatureKey::BulkImport => "bulk-import",
            FeatureKey::BulkMessaging => "bulk-messaging",
            FeatureKey::PracticeTracking => "practice-tracking",
            FeatureKey::MultiLocation => "multi-location",
            FeatureKey::ParentPortal => "parent-portal",
            FeatureKey::PayrollReport => "payroll-report",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = EncoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FeatureKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EncoreError::UnknownFeature(s.to_string()))
    }
}

/// Set of features enabled for one organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entitlements {
    keys: HashSet<FeatureKey>,
}

impl Entitlements {
    /// No features enabled. Callers fall back to this when entitlements
    /// could not be fetched.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_keys<I: IntoIterator<Item = FeatureKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }

    /// Build from raw keys as delivered by the data layer.
    ///
    /// Unrecognised keys are skipped, never enabled.
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = HashSet::new();
        for raw in iter {
            let raw = raw.as_ref();
            match raw.parse::<FeatureKey>() {
                Ok(k) => {
                    keys.insert(k);
                }
                Err(_) => tracing::warn!(feature = %raw, "skipping unknown entitlement"),
            }
        }
        Self { keys }
    }

    pub fn contains(&self, key: FeatureKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeatureKey> + '_ {
        self.keys.iter().copied()
    }
}

impl FromIterator<FeatureKey> for Entitlements {
    fn from_iter<I: IntoIterator<Item = FeatureKey>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

/// Feature gate check used by the UI before rendering gated functionality.
pub fn is_feature_enabled(key: FeatureKey, entitlements: &Entitlements) -> bool {
    entitlements.contains(key)
}
