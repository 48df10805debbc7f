#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use encore_core::{Entitlements, FeatureKey, Role};
use encore_policy::policy::pattern::{normalize_path, RoutePattern};
use encore_policy::{AccessDecision, DenyReason, RouteAccessPolicy};

fn policy() -> RouteAccessPolicy {
    RouteAccessPolicy::builtin().unwrap()
}

#[test]
fn deny_reasons() {
    let p = policy();
    assert_eq!(p.decide("/invoices", Role::Finance), AccessDecision::Allowed);
    assert_eq!(
        p.decide("/invoices", Role::Teacher),
        AccessDecision::Denied(DenyReason::RoleNotPermitted)
    );
    assert_eq!(
        p.decide("/lessons", Role::Owner),
        AccessDecision::Denied(DenyReason::NoMatchingRule)
    );
    assert_eq!(
        p.decide("lessons", Role::Owner),
        AccessDecision::Denied(DenyReason::MalformedPath)
    );
}

#[test]
fn most_specific_rule_wins() {
    let p = policy();
    assert_eq!(p.rule_for("/students/42").unwrap().pattern().as_str(), "/students/*");
    assert_eq!(p.rule_for("/students/import").unwrap().pattern().as_str(), "/students/import");
    assert_eq!(p.rule_for("/settings/billing").unwrap().pattern().as_str(), "/settings/billing");
    assert_eq!(p.rule_for("/settings/team").unwrap().pattern().as_str(), "/settings/*");

    assert!(p.can_role_access("/students/42", Role::Teacher));
    assert!(!p.can_role_access("/students/import", Role::Teacher));
    assert!(p.can_role_access("/settings/profile", Role::Finance));
    assert!(!p.can_role_access("/settings", Role::Finance));
    assert!(!p.can_role_access("/settings/billing", Role::Admin));
}

#[test]
fn rules_are_ordered_most_specific_first() {
    let p = policy();
    let specs: Vec<_> = p.rules().iter().map(|r| r.specificity()).collect();
    assert!(specs.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn role_check_ignores_feature_requirements() {
    let p = policy();
    assert!(p.can_role_access("/students/import", Role::Admin));
    assert!(p.can_role_access("/portal/home", Role::Parent));
}

#[test]
fn gated_route_needs_entitlement() {
    let p = policy();
    let none = Entitlements::none();
    let ents = Entitlements::from_keys([FeatureKey::BulkImport, FeatureKey::ParentPortal]);

    assert_eq!(
        p.decide_with_entitlements("/students/import", Role::Admin, &none),
        AccessDecision::Denied(DenyReason::FeatureDisabled(FeatureKey::BulkImport))
    );
    assert!(p.decide_with_entitlements("/students/import", Role::Admin, &ents).is_allowed());
    assert!(p.decide_with_entitlements("/portal/invoices", Role::Parent, &ents).is_allowed());
    assert_eq!(
        p.decide_with_entitlements("/reports/teacher-performance", Role::Owner, &ents),
        AccessDecision::Denied(DenyReason::FeatureDisabled(FeatureKey::TeacherPerformanceReport))
    );
}

#[test]
fn role_denial_reported_before_missing_feature() {
    let p = policy();
    assert_eq!(
        p.decide_with_entitlements("/students/import", Role::Teacher, &Entitlements::none()),
        AccessDecision::Denied(DenyReason::RoleNotPermitted)
    );
}

#[test]
fn ungated_route_needs_no_entitlement() {
    let p = policy();
    assert!(p
        .decide_with_entitlements("/invoices/12", Role::Finance, &Entitlements::none())
        .is_allowed());
    // /calendar/sync is gated, the rest of the calendar is not
    assert!(p
        .decide_with_entitlements("/calendar/week", Role::Teacher, &Entitlements::none())
        .is_allowed());
    assert!(!p
        .decide_with_entitlements("/calendar/sync", Role::Teacher, &Entitlements::none())
        .is_allowed());
}

#[test]
fn subtree_pattern_matches_on_segments() {
    let pat = RoutePattern::parse("/reports/*").unwrap();
    assert!(pat.is_descendants());
    assert!(pat.matches(&["reports"]));
    assert!(pat.matches(&["reports", "payroll", "2026"]));
    assert!(!pat.matches(&["reportsx"]));
    assert!(!pat.matches(&[]));

    let all = RoutePattern::parse("/*").unwrap();
    assert!(all.segments().is_empty());
    assert!(all.matches(&[]));
    assert!(all.matches(&["anything", "at", "all"]));
}

#[test]
fn exact_pattern_matches_only_itself() {
    let pat = RoutePattern::parse("/help").unwrap();
    assert!(!pat.is_descendants());
    assert!(pat.matches(&["help"]));
    assert!(!pat.matches(&["help", "faq"]));

    let root = RoutePattern::parse("/").unwrap();
    assert!(root.segments().is_empty());
    assert!(root.matches(&[]));
    assert!(!root.matches(&["help"]));
}

#[test]
fn exact_outranks_subtree_with_same_prefix() {
    let exact = RoutePattern::parse("/students").unwrap();
    let subtree = RoutePattern::parse("/students/*").unwrap();
    let deeper = RoutePattern::parse("/students/import/*").unwrap();
    assert!(exact.specificity() > subtree.specificity());
    assert!(deeper.specificity() > exact.specificity());
}

#[test]
fn path_normalisation() {
    assert_eq!(normalize_path("/"), Some(vec![]));
    assert_eq!(normalize_path("/invoices/"), Some(vec!["invoices"]));
    assert_eq!(normalize_path("/invoices/7?tab=lines#top"), Some(vec!["invoices", "7"]));
    assert_eq!(normalize_path("/?x=1"), Some(vec![]));
    assert_eq!(normalize_path("//"), None);
    assert_eq!(normalize_path("/a//"), None);
    assert_eq!(normalize_path("/a/./b"), None);
    assert_eq!(normalize_path("/a /b"), None);
    assert_eq!(normalize_path("relative"), None);
    assert_eq!(normalize_path(""), None);
}
