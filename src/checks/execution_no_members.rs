//! Execution-without-members check
//!
//! Cards in execution lists with nobody assigned are orphaned work.

use crate::checks::{CardCheck, CheckContext};
use crate::classifier::ListRole;
use crate::models::{Card, Finding, Severity};

pub struct ExecutionNoMembers;

impl CardCheck for ExecutionNoMembers {
    fn name(&self) -> &'static str {
        "execution_no_members"
    }

    fn description(&self) -> &'static str {
        "Cards in execution lists with no assigned members"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        if ctx.roles.contains(&ListRole::Execution) && !card.has_members() {
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

    fn run(card: &Card, list_name: &str) -> Option<Finding> {
        let roles = classify(list_name);
        ExecutionNoMembers.check(
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
    fn test_fires_without_members() {
        let card = test_card("Orphaned work");
        let finding = run(&card, "Development").unwrap();
        assert_eq!(finding.check, "execution_no_members");
    }

    #[test]
    fn test_quiet_with_members() {
        let mut card = test_card("Owned work");
        card.member_ids = vec!["member1".to_string()];
        assert!(run(&card, "In Progress").is_none());
    }

    #[test]
    fn test_quiet_in_non_execution_list() {
        // "Ready" is active but not execution.
        let card = test_card("Queued work");
        assert!(run(&card, "Ready").is_none());
    }
}
