//! Route table and navigable routes shipped with the app.

use encore_core::FeatureKey as F;
use encore_core::Role::{self, Admin, Finance, Owner, Parent, Teacher};

use super::engine::RuleDef;

const fn rule(pattern: &'static str, roles: &'static [Role]) -> RuleDef<'static> {
    RuleDef { pattern, roles, feature: None }
}

const fn gated(pattern: &'static str, roles: &'static [Role], feature: F) -> RuleDef<'static> {
    RuleDef { pattern, roles, feature: Some(feature) }
}

const TEACHING: &[Role] = &[Owner, Admin, Teacher];
const MANAGEMENT: &[Role] = &[Owner, Admin];
const BILLING: &[Role] = &[Owner, Admin, Finance];
const STAFF: &[Role] = &[Owner, Admin, Teacher, Finance];

/// Route table, most general rules first as authored. Order does not
/// affect matching.
pub const RULES: &[RuleDef<'static>] = &[
    rule("/dashboard", TEACHING),
    rule("/calendar/*", TEACHING),
    gated("/calendar/sync", TEACHING, F::CalendarSync),
    rule("/register/*", TEACHING),
    rule("/students/*", TEACHING),
    gated("/students/import", MANAGEMENT, F::BulkImport),
    rule("/teachers/*", MANAGEMENT),
    rule("/locations/*", MANAGEMENT),
    rule("/invoices/*", BILLING),
    rule("/reports/*", BILLING),
    gated("/reports/teacher-performance", MANAGEMENT, F::TeacherPerformanceReport),
    gated("/reports/payroll", BILLING, F::PayrollReport),
    rule("/messages/*", TEACHING),
    gated("/practice/*", TEACHING, F::PracticeTracking),
    rule("/resources/*", TEACHING),
    rule("/settings/*", MANAGEMENT),
    rule("/settings/billing", &[Owner]),
    rule("/settings/profile", STAFF),
    rule("/help", &[Owner, Admin, Teacher, Finance, Parent]),
    gated("/portal/*", &[Parent], F::ParentPortal),
];

/// Every route the navigation layer can reach. `:param` segments stand in
/// for ids and match like any other literal under a subtree rule.
pub const ROUTES: &[&str] = &[
    "/dashboard",
    "/calendar",
    "/calendar/sync",
    "/calendar/lessons/:id",
    "/register",
    "/register/:date",
    "/students",
    "/students/:id",
    "/students/import",
    "/teachers",
    "/teachers/:id",
    "/locations",
    "/locations/:id",
    "/invoices",
    "/invoices/:id",
    "/reports",
    "/reports/revenue",
    "/reports/payroll",
    "/reports/teacher-performance",
    "/messages",
    "/practice",
    "/resources",
    "/settings",
    "/settings/billing",
    "/settings/profile",
    "/settings/integrations",
    "/help",
    "/portal/home",
    "/portal/schedule",
    "/portal/invoices",
    "/portal/practice",
    "/portal/resources",
];

pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Owner | Role::Admin | Role::Teacher => "/dashboard",
        Role::Finance => "/invoices",
        Role::Parent => "/portal/home",
    }
}
