//! Done-without-due-date check
//!
//! A card marked done with no due date leaves no trace of when the work was
//! completed, so velocity cannot be measured.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct DoneNoDue;

impl CardCheck for DoneNoDue {
    fn name(&self) -> &'static str {
        "done_no_due"
    }

    fn description(&self) -> &'static str {
        "Cards in done lists without due dates"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if ctx.roles.contains(&ListRole::Done) && card.due_date().is_none() {
            return Some(Finding::new(
                self.name(),
                self.severity(),
                card,
                ctx.list_name,
            ));
        }
        None
    }
}
