//! Missing-description-in-critical-list check
//!
//! Cards in critical lists without descriptions leave the team guessing
//! requirements. Whitespace-only descriptions count as empty.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct CriticalNoDescription;

impl CardCheck for CriticalNoDescription {
    fn name(&self) -> &'static str {
        "critical_no_description"
    }

    fn description(&self) -> &'static str {
        "Cards in critical lists without descriptions"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if ctx.roles.contains(&ListRole::Critical) && !card.has_description() {
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
