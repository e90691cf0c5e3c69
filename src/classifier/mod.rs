//! List role classification
//!
//! Lists are classified by keyword membership on their names. Roles are not
//! mutually exclusive: a list named "Sprint 1 - Testing" is simultaneously
//! active, execution, and critical. Classification is a pure function of the
//! list name, so re-classifying the same name always yields the same roles.

use std::collections::BTreeSet;

/// Semantic role a list can hold, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListRole {
    /// Completed work (done, archive, ...)
    Done,
    /// Cards that should carry due dates
    Active,
    /// Cards that should have assigned members
    Execution,
    /// Cards that should have descriptions
    Critical,
}

const DONE_KEYWORDS: &[&str] = &["done", "completed", "finished", "closed", "archive"];
const ACTIVE_KEYWORDS: &[&str] = &[
    "sprint",
    "doing",
    "in progress",
    "testing",
    "ready",
    "wip",
    "development",
];
const EXECUTION_KEYWORDS: &[&str] = &["sprint", "doing", "in progress", "development", "testing"];
const CRITICAL_KEYWORDS: &[&str] = &["sprint", "testing", "in progress", "doing", "review"];

/// Lists whose names match these keywords hold sprint work and are expected
/// to carry sprint labels.
const SPRINT_LIST_KEYWORDS: &[&str] = &["sprint", "doing", "in progress", "testing", "ready"];

/// The set of roles a list name maps to
pub type RoleSet = BTreeSet<ListRole>;

fn matches_any(name_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| name_lower.contains(kw))
}

/// Classify a list name into its role set.
///
/// Matching is a case-insensitive substring test; a role applies if any of
/// its keywords occurs in the name. Multiple matching keywords do not
/// multiply anything.
pub fn classify(list_name: &str) -> RoleSet {
    let name_lower = list_name.to_lowercase();
    let mut roles = RoleSet::new();

    if matches_any(&name_lower, DONE_KEYWORDS) {
        roles.insert(ListRole::Done);
    }
    if matches_any(&name_lower, ACTIVE_KEYWORDS) {
        roles.insert(ListRole::Active);
    }
    if matches_any(&name_lower, EXECUTION_KEYWORDS) {
        roles.insert(ListRole::Execution);
    }
    if matches_any(&name_lower, CRITICAL_KEYWORDS) {
        roles.insert(ListRole::Critical);
    }

    roles
}

/// Whether a list name marks it as part of the sprint workflow.
pub fn is_sprint_related(list_name: &str) -> bool {
    matches_any(&list_name.to_lowercase(), SPRINT_LIST_KEYWORDS)
}
