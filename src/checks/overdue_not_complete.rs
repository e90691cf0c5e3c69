//! Overdue-not-done check
//!
//! Cards past their due date but still in the active workflow are zombie
//! tasks that kill sprint health. Days overdue is the floor of elapsed whole
//! days relative to the injected audit clock.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct OverdueNotComplete;

impl CardCheck for OverdueNotComplete {
    fn name(&self) -> &'static str {
        "overdue_not_complete"
    }

    fn description(&self) -> &'static str {
        "Cards past their due date outside done lists"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if ctx.roles.contains(&ListRole::Done) {
            return None;
        }
        // Unparsable due dates were already surfaced as None here.
        let due = card.due_date()?;
        if due < ctx.now {
            let days_overdue = (ctx.now - due).num_days();
            return Some(
                Finding::new(self.name(), self.severity(), card, ctx.list_name)
                    .with_days_overdue(days_overdue),
            );
        }
        None
    }
}
