//! Board audit engine
//!
//! Runs the full audit over a materialized board snapshot:
//!
//! 1. Traverse open lists (closed lists are treated as non-existent).
//! 2. Classify each list into its role set.
//! 3. Evaluate every card rule check against every card.
//! 4. Run structural list checks (empty lists, stale lists, deletion
//!    candidates).
//! 5. Aggregate findings into categorized buckets and compute the health
//!    score.
//!
//! The engine is read-only and pure: given the same snapshot, clock, and
//! options it always produces the same [`AuditResult`].

mod structure;

use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

use crate::checks::{all_checks, CheckContext};
use crate::classifier::classify;
use crate::config::AuditConfig;
use crate::models::{AuditResult, AuditSummary, Board, Finding, Severity};
use crate::scoring::{apply_deductions, ScoreBand};

/// Board audit runner.
///
/// The clock is injected so overdue and age computations are deterministic;
/// callers outside tests pass `Utc::now()`.
pub struct BoardAuditor<'a> {
    board: &'a Board,
    now: DateTime<Utc>,
    pattern: Option<Regex>,
    config: AuditConfig,
}

impl<'a> BoardAuditor<'a> {
    pub fn new(board: &'a Board, now: DateTime<Utc>) -> Self {
        Self {
            board,
            now,
            pattern: None,
            config: AuditConfig::default(),
        }
    }

    /// Validate card names against a naming pattern.
    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the full audit.
    pub fn run(&self) -> AuditResult {
        let checks = all_checks();

        // Every category is present in the result, even when empty.
        let mut findings: BTreeMap<String, Vec<Finding>> = checks
            .iter()
            .map(|check| (check.name().to_string(), Vec::new()))
            .collect();

        let mut total_lists = 0;
        let mut total_cards = 0;
        let mut empty_lists = Vec::new();
        let mut stale_lists = Vec::new();
        let mut deletion_candidates = Vec::new();

        for list in self.board.open_lists() {
            total_lists += 1;

            if list.cards.is_empty() {
                empty_lists.push(list.name.clone());
                continue;
            }
            total_cards += list.cards.len();

            let roles = classify(&list.name);
            debug!(list = %list.name, ?roles, cards = list.cards.len(), "auditing list");

            if let Some(stale) = structure::stale_list(list, self.now, &self.config.thresholds) {
                stale_lists.push(stale);
            }
            deletion_candidates.extend(structure::deletion_candidates(
                list,
                &roles,
                self.now,
                &self.config.thresholds,
            ));

            let ctx = CheckContext {
                list_name: &list.name,
                roles: &roles,
                now: self.now,
                pattern: self.pattern.as_ref(),
            };
            for card in &list.cards {
                for check in &checks {
                    if let Some(finding) = check.check(card, &ctx) {
                        findings.entry(check.name().to_string()).or_default().push(finding);
                    }
                }
            }
        }

        // Most-overdue first, so truncated reports show the worst offenders.
        if let Some(overdue) = findings.get_mut("overdue_not_complete") {
            overdue.sort_by_key(|f| std::cmp::Reverse(f.days_overdue.unwrap_or(0)));
        }
        stale_lists.sort_by_key(|s| std::cmp::Reverse(s.newest_card_age_days));
        deletion_candidates.sort_by_key(|c| std::cmp::Reverse(c.age_days));

        // Category-level severity counts: a category counts once no matter
        // how many findings it holds.
        let weights = &self.config.weights.board;
        let mut critical_issues = 0;
        let mut high_issues = 0;
        let mut medium_issues = 0;
        let mut deductions = 0;
        for check in &checks {
            let non_empty = findings
                .get(check.name())
                .is_some_and(|bucket| !bucket.is_empty());
            if !non_empty {
                continue;
            }
            deductions += weights.category_weight(check.severity());
            match check.severity() {
                Severity::Critical => critical_issues += 1,
                Severity::High => high_issues += 1,
                Severity::Medium => medium_issues += 1,
                Severity::Low | Severity::Info => {}
            }
        }

        let structural_issues = empty_lists.len() + stale_lists.len();
        deductions += structural_issues as u32 * weights.structural_issue;
        let health_score = apply_deductions(deductions);

        AuditResult {
            board_id: self.board.id.clone(),
            board_name: self.board.name.clone(),
            summary: AuditSummary {
                total_lists,
                total_cards,
                critical_issues,
                high_issues,
                medium_issues,
                structural_issues,
                health_score,
            },
            band: ScoreBand::from_score(health_score),
            findings,
            empty_lists,
            stale_lists,
            deletion_candidates,
        }
    }
}
