//! Card rule checks
//!
//! This module provides the check framework and the fixed catalogue of rule
//! checks the board audit runs against every card.
//!
//! # Architecture
//!
//! Each check implements [`CardCheck`] and answers one question about a card
//! given the roles of its containing list. Checks are independent: all of
//! them run unconditionally per card, none is short-circuited by another
//! firing, and a card may trigger several at once. A check never errors;
//! it either produces a [`Finding`] or it does not.
//!
//! # The catalogue
//!
//! | Check | Severity | Fires when |
//! |---|---|---|
//! | `done_no_due` | critical | done role, no due date |
//! | `done_incomplete_checklist` | critical | done role, checklist items unfinished |
//! | `overdue_not_complete` | critical | due date in the past, no done role |
//! | `active_no_due` | high | active role, no due date |
//! | `execution_no_members` | high | execution role, nobody assigned |
//! | `empty_checklist` | medium | any checklist with zero items |
//! | `pattern_violation` | medium | name fails the supplied pattern |
//! | `critical_no_description` | medium | critical role, blank description |

mod active_no_due;
mod critical_no_description;
mod done_incomplete_checklist;
mod done_no_due;
mod empty_checklist;
mod execution_no_members;
mod overdue_not_complete;
mod pattern_violation;

pub use active_no_due::ActiveNoDue;
pub use critical_no_description::CriticalNoDescription;
pub use done_incomplete_checklist::DoneIncompleteChecklist;
pub use done_no_due::DoneNoDue;
pub use empty_checklist::EmptyChecklist;
pub use execution_no_members::ExecutionNoMembers;
pub use overdue_not_complete::OverdueNotComplete;
pub use pattern_violation::PatternViolation;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::classifier::RoleSet;
use crate::models::{Card, Finding, Severity};

/// Everything a check may consult besides the card itself.
///
/// The clock is injected rather than read from the environment so that
/// date-relative checks are deterministic under test.
pub struct CheckContext<'a> {
    /// Name of the list containing the card
    pub list_name: &'a str,
    /// Roles of the containing list
    pub roles: &'a RoleSet,
    /// Audit run time, used for overdue computation
    pub now: DateTime<Utc>,
    /// Optional naming pattern supplied by the caller
    pub pattern: Option<&'a Regex>,
}

/// Trait for all card rule checks
pub trait CardCheck: Send + Sync {
    /// Category key for this check (e.g. "done_no_due"). Findings are
    /// bucketed under this key in the audit result.
    fn name(&self) -> &'static str;

    /// Human-readable description of what this check finds
    fn description(&self) -> &'static str;

    /// Severity of the category this check contributes to
    fn severity(&self) -> Severity;

    /// Evaluate the check against one card.
    ///
    /// Returns a finding if the rule is violated, `None` otherwise.
    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding>;
}

/// The fixed check catalogue, in report order.
pub fn all_checks() -> Vec<Box<dyn CardCheck>> {
    vec![
        Box::new(DoneNoDue),
        Box::new(DoneIncompleteChecklist),
        Box::new(OverdueNotComplete),
        Box::new(ActiveNoDue),
        Box::new(ExecutionNoMembers),
        Box::new(EmptyChecklist),
        Box::new(PatternViolation),
        Box::new(CriticalNoDescription),
    ]
}
