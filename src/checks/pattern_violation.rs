//! Naming-pattern check
//!
//! Validates card names against a caller-supplied regular expression. The
//! match is a search, not a full match, so `^PF-[A-Z]+-\d+` accepts
//! "PF-FEAT-001: Fix bug". Evaluated only when a pattern was supplied.

use crate::checks::{CardCheck, CheckContext};
use crate::models::{Card, Finding, Severity};

pub struct PatternViolation;

impl CardCheck for PatternViolation {
    fn name(&self) -> &'static str {
        "pattern_violation"
    }

    fn description(&self) -> &'static str {
        "Card names that fail the supplied naming pattern"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn check(&self, card: &Card, ctx: &CheckContext) -> Option<Finding> {
        let pattern = ctx.pattern?;
        if !pattern.is_match(&card.name) {
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
    use regex::Regex;

    fn run(card: &Card, pattern: Option<&Regex>) -> Option<Finding> {
        let roles = classify("Backlog");
        PatternViolation.check(
            card,
            &CheckContext {
                list_name: "Backlog",
                roles: &roles,
                now: test_now(),
                pattern,
            },
        )
    }

    #[test]
    fn test_fires_on_violation() {
        let pattern = Regex::new(r"^PF-[A-Z]+-\d+").unwrap();
        let card = test_card("Random task");
        let finding = run(&card, Some(&pattern)).unwrap();
        assert_eq!(finding.check, "pattern_violation");
    }

    #[test]
    fn test_search_not_full_match() {
        let pattern = Regex::new(r"^PF-[A-Z]+-\d+").unwrap();
        let card = test_card("PF-FEAT-001: Fix bug");
        assert!(run(&card, Some(&pattern)).is_none());
    }

    #[test]
    fn test_skipped_without_pattern() {
        let card = test_card("anything goes");
        assert!(run(&card, None).is_none());
    }
}
