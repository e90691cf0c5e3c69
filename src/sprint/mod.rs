//! Sprint health analyzer
//!
//! Groups cards by sprint label rather than by list placement, so work that
//! drifts across lists still counts toward its sprint. For each sprint the
//! analyzer computes due-date coverage, overdue and due-soon counts, and a
//! health tier, then folds everything into a board-level sprint score.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::classifier::{classify, is_sprint_related, ListRole};
use crate::config::AuditConfig;
use crate::models::Board;
use crate::scoring::{apply_deductions, ScoreBand};

/// Health tier for a single sprint, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SprintHealth {
    Critical,
    NeedsAttention,
    Watch,
    Healthy,
}

impl std::fmt::Display for SprintHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SprintHealth::Critical => "CRITICAL",
            SprintHealth::NeedsAttention => "NEEDS_ATTENTION",
            SprintHealth::Watch => "WATCH",
            SprintHealth::Healthy => "HEALTHY",
        };
        write!(f, "{s}")
    }
}

/// An overdue card attributed to a sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueCard {
    pub card_id: String,
    pub card_name: String,
    pub list_name: String,
    pub days_overdue: i64,
}

/// Per-sprint statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintStats {
    pub total_cards: usize,
    pub cards_with_due: usize,
    pub overdue: usize,
    pub due_soon: usize,
    pub on_track: usize,
    #[serde(
        rename = "overdue_sprint_cards",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub overdue_cards: Vec<OverdueCard>,
}

impl SprintStats {
    fn fraction(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    /// Tier the sprint by its overdue, coverage, and due-soon fractions.
    pub fn health(&self) -> SprintHealth {
        let overdue = Self::fraction(self.overdue, self.total_cards);
        let without_due = Self::fraction(self.total_cards - self.cards_with_due, self.total_cards);
        let due_soon = Self::fraction(self.due_soon, self.total_cards);

        if overdue > 0.3 {
            SprintHealth::Critical
        } else if overdue > 0.1 || without_due > 0.2 {
            SprintHealth::NeedsAttention
        } else if due_soon > 0.5 {
            SprintHealth::Watch
        } else {
            SprintHealth::Healthy
        }
    }
}

/// A card sitting in a sprint-related list without any sprint label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlabeledCard {
    pub card_id: String,
    pub card_name: String,
    pub list_name: String,
}

/// Full sprint analysis for one board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintReport {
    pub board_id: String,
    pub board_name: String,
    /// Sprint name to stats, ordered by name for stable output.
    pub sprints: BTreeMap<String, SprintStats>,
    pub unlabeled_cards: Vec<UnlabeledCard>,
    pub health_score: u32,
    pub band: ScoreBand,
}

impl SprintReport {
    /// Sprints in their worst tier, for the report's attention section.
    pub fn sprints_needing_attention(&self) -> impl Iterator<Item = (&String, &SprintStats)> {
        self.sprints.iter().filter(|(_, stats)| {
            matches!(
                stats.health(),
                SprintHealth::Critical | SprintHealth::NeedsAttention
            )
        })
    }

    pub fn total_overdue(&self) -> usize {
        self.sprints.values().map(|s| s.overdue).sum()
    }
}

fn sprint_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^s\d+").unwrap())
}

/// Whether a label name designates a sprint.
///
/// With a filter, a case-insensitive substring match on the filter decides.
/// Without one, names containing "sprint" or starting with an S-number
/// ("S1", "s23") qualify.
fn is_sprint_label(name: &str, filter: Option<&str>) -> bool {
    let name_lower = name.to_lowercase();
    match filter {
        Some(f) => name_lower.contains(&f.to_lowercase()),
        None => name_lower.contains("sprint") || sprint_number_pattern().is_match(name),
    }
}

/// Analyze sprint health across the board.
///
/// Cards are attributed to every sprint label they carry. Cards in
/// sprint-related lists without any sprint label are flagged separately,
/// unless the list is also done-classified.
pub fn analyze(
    board: &Board,
    filter: Option<&str>,
    now: DateTime<Utc>,
    config: &AuditConfig,
) -> SprintReport {
    let mut sprints: BTreeMap<String, SprintStats> = BTreeMap::new();
    let mut unlabeled_cards = Vec::new();

    for list in board.open_lists() {
        let roles = classify(&list.name);
        let sprint_list = is_sprint_related(&list.name);
        let done_list = roles.contains(&ListRole::Done);

        for card in &list.cards {
            let sprint_labels: Vec<&str> = card
                .labels
                .iter()
                .filter(|l| is_sprint_label(&l.name, filter))
                .map(|l| l.name.as_str())
                .collect();

            if sprint_labels.is_empty() {
                if sprint_list && !done_list {
                    unlabeled_cards.push(UnlabeledCard {
                        card_id: card.id.clone(),
                        card_name: card.name.clone(),
                        list_name: list.name.clone(),
                    });
                }
                continue;
            }

            let due = card.due_date();
            for sprint in sprint_labels {
                let stats = sprints.entry(sprint.to_string()).or_default();
                stats.total_cards += 1;
                let Some(due) = due else { continue };
                stats.cards_with_due += 1;

                let days_until = (due - now).num_days();
                if due < now {
                    stats.overdue += 1;
                    stats.overdue_cards.push(OverdueCard {
                        card_id: card.id.clone(),
                        card_name: card.name.clone(),
                        list_name: list.name.clone(),
                        days_overdue: (now - due).num_days(),
                    });
                } else if days_until <= config.thresholds.due_soon_days {
                    stats.due_soon += 1;
                } else {
                    stats.on_track += 1;
                }
            }
        }
    }

    for stats in sprints.values_mut() {
        stats
            .overdue_cards
            .sort_by_key(|c| std::cmp::Reverse(c.days_overdue));
    }

    let unhealthy_sprints = sprints
        .values()
        .filter(|s| {
            matches!(
                s.health(),
                SprintHealth::Critical | SprintHealth::NeedsAttention
            )
        })
        .count();
    let mut issues = unhealthy_sprints;
    if !unlabeled_cards.is_empty() {
        issues += 1;
    }
    let total_overdue: usize = sprints.values().map(|s| s.overdue).sum();

    let weights = &config.weights.sprint;
    let deductions = issues as u32 * weights.issue + total_overdue as u32 * weights.overdue_card;
    let health_score = apply_deductions(deductions);
    debug!(
        sprints = sprints.len(),
        issues, total_overdue, health_score, "sprint analysis complete"
    );

    SprintReport {
        board_id: board.id.clone(),
        board_name: board.name.clone(),
        sprints,
        unlabeled_cards,
        health_score,
        band: ScoreBand::from_score(health_score),
    }
}
