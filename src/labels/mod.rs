//! Label hygiene analyzer
//!
//! Works over the board's label set plus per-label usage counts. Categories
//! are independent: a label can be both unused and part of a duplicate
//! group. Usage counts come from card label references, so only open lists
//! contribute.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::config::AuditConfig;
use crate::models::{Board, Label};
use crate::scoring::{apply_deductions, ScoreBand};

/// A label together with its usage count, as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelUsage {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub usage: usize,
}

/// Labels sharing a trimmed, case-folded name but carrying different colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub name: String,
    pub labels: Vec<LabelUsage>,
}

/// Two differently-named labels whose word sets overlap enough to suggest
/// one should absorb the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarPair {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelReport {
    pub board_id: String,
    pub board_name: String,
    pub total_labels: usize,
    pub duplicates: Vec<DuplicateGroup>,
    pub similar: Vec<SimilarPair>,
    pub unused: Vec<LabelUsage>,
    pub unnamed: Vec<LabelUsage>,
    pub health_score: u32,
    pub band: ScoreBand,
}

impl LabelReport {
    pub fn total_issues(&self) -> usize {
        self.duplicates.len() + self.similar.len() + self.unused.len() + self.unnamed.len()
    }
}

fn usage_entry(label: &Label, usage: usize) -> LabelUsage {
    LabelUsage {
        id: label.id.clone(),
        name: label.name.clone(),
        color: label.color.as_ref().map(|c| c.to_string()),
        usage,
    }
}

/// Count card references per label id across open lists.
fn usage_counts(board: &Board) -> BTreeMap<&str, usize> {
    let mut counts: BTreeMap<&str, usize> = board
        .labels
        .iter()
        .map(|l| (l.id.as_str(), 0))
        .collect();
    for list in board.open_lists() {
        for card in &list.cards {
            for label in &card.labels {
                *counts.entry(label.id.as_str()).or_insert(0) += 1;
            }
        }
    }
    counts
}

fn tokens(name: &str) -> BTreeSet<String> {
    name.split_whitespace()
        .map(|t| t.to_lowercase())
        .collect()
}

/// Token-set similarity: subset containment, or overlap of at least 70%
/// of the smaller set.
fn names_similar(a: &str, b: &str) -> bool {
    let ta = tokens(a);
    let tb = tokens(b);
    if ta.is_empty() || tb.is_empty() {
        return false;
    }
    let shared = ta.intersection(&tb).count();
    let smaller = ta.len().min(tb.len());
    if shared == smaller {
        return true;
    }
    shared as f64 / smaller as f64 >= 0.7
}

/// Analyze label hygiene for the board.
pub fn analyze(board: &Board, config: &AuditConfig) -> LabelReport {
    let counts = usage_counts(board);
    let usage_of = |label: &Label| counts.get(label.id.as_str()).copied().unwrap_or(0);

    let mut unused = Vec::new();
    let mut unnamed = Vec::new();
    let mut by_name: BTreeMap<String, Vec<&Label>> = BTreeMap::new();

    for label in &board.labels {
        let trimmed = label.name.trim();
        if trimmed.is_empty() {
            unnamed.push(usage_entry(label, usage_of(label)));
        } else {
            by_name
                .entry(trimmed.to_lowercase())
                .or_default()
                .push(label);
        }
        if usage_of(label) == 0 {
            unused.push(usage_entry(label, 0));
        }
    }

    let mut duplicates = Vec::new();
    for (name, group) in &by_name {
        if group.len() < 2 {
            continue;
        }
        let distinct_colors: BTreeSet<_> = group
            .iter()
            .map(|l| l.color.as_ref().map(|c| c.to_string()))
            .collect();
        if distinct_colors.len() > 1 {
            duplicates.push(DuplicateGroup {
                name: name.clone(),
                labels: group.iter().map(|l| usage_entry(l, usage_of(l))).collect(),
            });
        }
    }

    // Similarity compares distinct names, not individual labels, so a
    // duplicate group contributes one name.
    let names: Vec<&String> = by_name.keys().collect();
    let mut similar = Vec::new();
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            if names_similar(a, b) {
                similar.push(SimilarPair {
                    first: (*a).clone(),
                    second: (*b).clone(),
                });
            }
        }
    }

    let weights = &config.weights.labels;
    let deductions = duplicates.len() as u32 * weights.duplicate_group
        + unused.len() as u32 * weights.unused_label
        + unnamed.len() as u32 * weights.unnamed_label
        + similar.len() as u32 * weights.similar_pair;
    let health_score = apply_deductions(deductions);
    debug!(
        labels = board.labels.len(),
        duplicates = duplicates.len(),
        similar = similar.len(),
        unused = unused.len(),
        unnamed = unnamed.len(),
        health_score,
        "label analysis complete"
    );

    LabelReport {
        board_id: board.id.clone(),
        board_name: board.name.clone(),
        total_labels: board.labels.len(),
        duplicates,
        similar,
        unused,
        unnamed,
        health_score,
        band: ScoreBand::from_score(health_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, LabelColor, List};

    fn label(id: &str, name: &str, color: Option<LabelColor>) -> Label {
        Label {
            id: id.to_string(),
            name: name.to_string(),
            color,
        }
    }

    fn board_with(labels: Vec<Label>, lists: Vec<List>) -> Board {
        Board {
            id: "b1".into(),
            name: "Board".into(),
            lists,
            labels,
        }
    }

    fn list_using(labels: Vec<Label>) -> List {
        List {
            id: "l1".into(),
            name: "Backlog".into(),
            closed: false,
            cards: vec![Card {
                id: "68fcf05e481843db13204397".into(),
                name: "card".into(),
                labels,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_duplicate_and_unused_scenario() {
        // "Bug" (red, used 3 times) and "bug" (blue, unused): one duplicate
        // group of two, and the blue one also shows up as unused.
        let red = label("1", "Bug", Some(LabelColor::Red));
        let blue = label("2", "bug", Some(LabelColor::Blue));
        let lists = vec![
            list_using(vec![red.clone()]),
            list_using(vec![red.clone()]),
            list_using(vec![red.clone()]),
        ];
        let b = board_with(vec![red, blue], lists);
        let report = analyze(&b, &AuditConfig::default());

        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].labels.len(), 2);
        assert_eq!(report.unused.len(), 1);
        assert_eq!(report.unused[0].name, "bug");
        // One duplicate group (10) + one unused (2).
        assert_eq!(report.health_score, 88);
    }

    #[test]
    fn test_same_name_same_color_not_duplicate() {
        let a = label("1", "Bug", Some(LabelColor::Red));
        let b_lbl = label("2", "bug", Some(LabelColor::Red));
        let b = board_with(vec![a.clone(), b_lbl], vec![list_using(vec![a])]);
        let report = analyze(&b, &AuditConfig::default());
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_similar_names_by_subset() {
        let a = label("1", "Backend Bug", Some(LabelColor::Red));
        let b_lbl = label("2", "Bug", Some(LabelColor::Orange));
        let b = board_with(
            vec![a.clone(), b_lbl.clone()],
            vec![list_using(vec![a, b_lbl])],
        );
        let report = analyze(&b, &AuditConfig::default());

        assert_eq!(report.similar.len(), 1);
        assert!(report.duplicates.is_empty());
        assert_eq!(report.health_score, 95);
    }

    #[test]
    fn test_dissimilar_names_pass() {
        let a = label("1", "Backend", Some(LabelColor::Red));
        let b_lbl = label("2", "Frontend", Some(LabelColor::Blue));
        let b = board_with(
            vec![a.clone(), b_lbl.clone()],
            vec![list_using(vec![a, b_lbl])],
        );
        let report = analyze(&b, &AuditConfig::default());
        assert!(report.similar.is_empty());
        assert_eq!(report.health_score, 100);
        assert_eq!(report.band, ScoreBand::Excellent);
    }

    #[test]
    fn test_unnamed_labels_flagged() {
        let blank = label("1", "   ", Some(LabelColor::Green));
        let named = label("2", "Feature", Some(LabelColor::Purple));
        let b = board_with(
            vec![blank, named.clone()],
            vec![list_using(vec![named])],
        );
        let report = analyze(&b, &AuditConfig::default());

        assert_eq!(report.unnamed.len(), 1);
        // Unnamed (5) + unused (2): the blank label is both.
        assert_eq!(report.health_score, 93);
    }

    #[test]
    fn test_usage_ignores_closed_lists() {
        let lbl = label("1", "Bug", Some(LabelColor::Red));
        let mut closed = list_using(vec![lbl.clone()]);
        closed.closed = true;
        let b = board_with(vec![lbl], vec![closed]);
        let report = analyze(&b, &AuditConfig::default());
        assert_eq!(report.unused.len(), 1);
    }

    #[test]
    fn test_token_similarity_rules() {
        assert!(names_similar("backend bug", "Bug"));
        assert!(names_similar("high priority bug", "priority bug"));
        assert!(!names_similar("backend", "frontend"));
        assert!(!names_similar("", "bug"));
    }

    #[test]
    fn test_empty_board_full_score() {
        let b = board_with(vec![], vec![]);
        let report = analyze(&b, &AuditConfig::default());
        assert_eq!(report.total_labels, 0);
        assert_eq!(report.total_issues(), 0);
        assert_eq!(report.health_score, 100);
    }
}
