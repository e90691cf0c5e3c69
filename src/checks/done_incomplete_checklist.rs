//! Done-with-incomplete-checklist check
//!
//! A card in a done list whose checklist still has open items signals a
//! false sense of completion.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct DoneIncompleteChecklist;

impl CardCheck for DoneIncompleteChecklist {
    fn name(&self) -> &'static str {
        "done_incomplete_checklist"
    }

    fn description(&self) -> &'static str {
        "Cards in done lists with unfinished checklist items"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if !ctx.roles.contains(&ListRole::Done) || card.checklists.is_empty() {
            return None;
        }
        let (completed, total) = card.checklist_progress();
        if total > 0 && completed < total {
            return Some(
                Finding::new(self.name(), self.severity(), card, ctx.list_name)
                    .with_checklist_progress(completed, total),
            );
        }
        None
    }
}
