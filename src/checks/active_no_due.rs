//! Active-without-due-date check
//!
//! Active cards without due dates cannot be late, which means no
//! accountability and no sprint planning.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct ActiveNoDue;

impl CardCheck for ActiveNoDue {
    fn name(&self) -> &'static str {
        "active_no_due"
    }

    fn description(&self) -> &'static str {
        "Cards in active lists without due dates"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if ctx.roles.contains(&ListRole::Active) && card.due_date().is_none() {
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
