//! Empty-checklist check
//!
//! A checklist with zero items is a fake productivity signal. Fires once per
//! card regardless of how many empty checklists it carries.

use crate::checks::{CardCheck, CheckContext};
use crate::models::{Card, Finding, Severity};

pub struct EmptyChecklist;

impl CardCheck for EmptyChecklist {
    fn name(&self) -> &'static str {
        "empty_checklist"
    }

    fn description(&self) -> &'static str {
        "Cards with checklists that have no items"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if card.checklists.iter().any(|cl| cl.items.is_empty()) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::tests::{test_card, test_now};
    use crate::classifier::classify;
    use crate::models::{CheckItem, Checklist};

    fn run(card: &Card, list_name: &str) -> Option<Finding> {
        let roles = classify(list_name);
        EmptyChecklist.check(
            card,
            &CheckContext {
                list_name,
                roles: &roles,
                now: test_now(),
                pattern: None,
            },
        )
    }

    #[test]
    fn test_fires_on_empty_checklist() {
        let mut card = test_card("Hollow card");
        card.checklists = vec![Checklist {
            name: "TODO".into(),
            items: vec![],
        }];
        assert!(run(&card, "Backlog").is_some());
    }

    #[test]
    fn test_fires_once_even_with_mixed_checklists() {
        let mut card = test_card("Mixed card");
        card.checklists = vec![
            Checklist {
                name: "Empty".into(),
                items: vec![],
            },
            Checklist {
                name: "Filled".into(),
                items: vec![CheckItem {
                    name: "step".into(),
                    state: "incomplete".into(),
                }],
            },
        ];
        assert!(run(&card, "Backlog").is_some());
    }

    #[test]
    fn test_quiet_without_checklists() {
        let card = test_card("Plain card");
        assert!(run(&card, "Backlog").is_none());
    }

    #[test]
    fn test_quiet_when_all_checklists_have_items() {
        let mut card = test_card("Good card");
        card.checklists = vec![Checklist {
            name: "Steps".into(),
            items: vec![CheckItem {
                name: "step".into(),
                state: "complete".into(),
            }],
        }];
        assert!(run(&card, "Backlog").is_none());
    }
}
