//! Core data models for boardcheck
//!
//! These models are used throughout the codebase for representing
//! board entities, findings, and audit results. The board-facing structs
//! deserialize directly from the Trello REST wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::scoring::ScoreBand;

/// Generate a deterministic finding ID based on content hash.
///
/// This ensures findings have stable IDs across runs, enabling:
/// - Diffing audit output between runs
/// - Reliable deduplication
///
/// The ID is a 16-character hex string derived from hashing the check name,
/// the card ID, and the containing list name.
pub fn deterministic_finding_id(check: &str, card_id: &str, list_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(check.as_bytes());
    hasher.update(b"\n");
    hasher.update(card_id.as_bytes());
    hasher.update(b"\n");
    hasher.update(list_name.as_bytes());
    let digest = hasher.finalize();
    format!("{:x}", digest)[..16].to_string()
}

/// Severity levels for findings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// The fixed Trello label palette.
///
/// `Other` absorbs palette additions the API may grow so a single unknown
/// color does not fail snapshot deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Blue,
    Sky,
    Lime,
    Pink,
    Black,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LabelColor::Green => "green",
            LabelColor::Yellow => "yellow",
            LabelColor::Orange => "orange",
            LabelColor::Red => "red",
            LabelColor::Purple => "purple",
            LabelColor::Blue => "blue",
            LabelColor::Sky => "sky",
            LabelColor::Lime => "lime",
            LabelColor::Pink => "pink",
            LabelColor::Black => "black",
            LabelColor::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A board label. Owned by the board, referenced by cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Label {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<LabelColor>,
}

/// A single checklist item
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
}

impl CheckItem {
    pub fn is_complete(&self) -> bool {
        self.state == "complete"
    }
}

/// A checklist on a card
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Checklist {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "checkItems")]
    pub items: Vec<CheckItem>,
}

/// A card within a list
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, rename = "idMembers")]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
}

impl Card {
    /// Parse the due date, if any.
    ///
    /// Unparsable values are treated as absent rather than raised as errors:
    /// one bad record must not abort the whole audit.
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.due.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Creation time derived from the card ID.
    ///
    /// The leading 8 hex characters of a Trello ID encode a Unix timestamp.
    /// Malformed IDs yield `None` (unknown age) and are excluded from
    /// age-based checks.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let prefix = self.id.get(..8)?;
        let secs = u32::from_str_radix(prefix, 16).ok()?;
        DateTime::from_timestamp(i64::from(secs), 0)
    }

    /// Whole days since creation, relative to `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created_at().map(|created| (now - created).num_days())
    }

    pub fn has_members(&self) -> bool {
        !self.member_ids.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.desc.trim().is_empty()
    }

    /// Completed and total checklist item counts across all checklists.
    pub fn checklist_progress(&self) -> (usize, usize) {
        let mut completed = 0;
        let mut total = 0;
        for checklist in &self.checklists {
            for item in &checklist.items {
                total += 1;
                if item.is_complete() {
                    completed += 1;
                }
            }
        }
        (completed, total)
    }
}

/// A list of cards on a board
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A fully materialized board snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Board {
    /// Open lists only. Closed lists are excluded from all audit traversal.
    pub fn open_lists(&self) -> impl Iterator<Item = &List> {
        self.lists.iter().filter(|l| !l.closed)
    }
}

/// A single rule violation tied to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Finding {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub check: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub card_id: String,
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub list_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
}

impl Finding {
    pub fn new(check: &str, severity: Severity, card: &Card, list_name: &str) -> Self {
        Self {
            id: deterministic_finding_id(check, &card.id, list_name),
            check: check.to_string(),
            severity,
            card_id: card.id.clone(),
            card_name: card.name.clone(),
            list_name: list_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_days_overdue(mut self, days: i64) -> Self {
        self.days_overdue = Some(days);
        self
    }

    pub fn with_checklist_progress(mut self, completed: usize, total: usize) -> Self {
        self.completed_items = Some(completed);
        self.total_items = Some(total);
        self
    }
}

/// Summary counts for an audit run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total_lists: usize,
    pub total_cards: usize,
    pub critical_issues: usize,
    pub high_issues: usize,
    pub medium_issues: usize,
    pub structural_issues: usize,
    pub health_score: u32,
}

/// A list with no recently created cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleList {
    pub list_name: String,
    pub newest_card_age_days: i64,
}

/// A completed card old enough to archive or delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionCandidate {
    pub card_id: String,
    pub card_name: String,
    pub list_name: String,
    pub age_days: i64,
}

/// Full result of a board audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub board_id: String,
    pub board_name: String,
    pub summary: AuditSummary,
    pub band: ScoreBand,
    /// Findings bucketed by check category. Every category is present,
    /// possibly empty; `BTreeMap` keeps iteration order stable.
    pub findings: BTreeMap<String, Vec<Finding>>,
    pub empty_lists: Vec<String>,
    pub stale_lists: Vec<StaleList>,
    pub deletion_candidates: Vec<DeletionCandidate>,
}

impl AuditResult {
    /// Findings in a category, empty slice if the category is unknown.
    pub fn category(&self, check: &str) -> &[Finding] {
        self.findings.get(check).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_findings(&self) -> usize {
        self.findings.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn card_with_id(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: "test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic_finding_id_stable() {
        let a = deterministic_finding_id("done_no_due", "abc123", "Done");
        let b = deterministic_finding_id("done_no_due", "abc123", "Done");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);

        let c = deterministic_finding_id("active_no_due", "abc123", "Done");
        assert_ne!(a, c);
    }

    #[test]
    fn test_due_date_parses_rfc3339() {
        let mut card = card_with_id("68fcf05e00000000");
        card.due = Some("2026-03-01T12:00:00.000Z".to_string());
        let due = card.due_date().expect("due should parse");
        assert_eq!(due, Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_due_date_fail_open() {
        let mut card = card_with_id("68fcf05e00000000");
        card.due = Some("not a date".to_string());
        assert!(card.due_date().is_none());

        card.due = None;
        assert!(card.due_date().is_none());
    }

    #[test]
    fn test_created_at_from_id_prefix() {
        let card = card_with_id("68fcf05e481843db13204397");
        let created = card.created_at().expect("id prefix should decode");
        assert_eq!(created.timestamp(), 0x68fcf05e_i64);
    }

    #[test]
    fn test_created_at_malformed_id() {
        assert!(card_with_id("zzzz").created_at().is_none());
        assert!(card_with_id("zzzzzzzz13204397").created_at().is_none());
        assert!(card_with_id("").created_at().is_none());
    }

    #[test]
    fn test_checklist_progress() {
        let mut card = card_with_id("68fcf05e00000000");
        card.checklists = vec![
            Checklist {
                name: "Definition of done".to_string(),
                items: vec![
                    CheckItem {
                        name: "a".into(),
                        state: "complete".into(),
                    },
                    CheckItem {
                        name: "b".into(),
                        state: "incomplete".into(),
                    },
                ],
            },
            Checklist {
                name: "QA".to_string(),
                items: vec![CheckItem {
                    name: "c".into(),
                    state: "complete".into(),
                }],
            },
        ];
        assert_eq!(card.checklist_progress(), (2, 3));
    }

    #[test]
    fn test_open_lists_skips_closed() {
        let board = Board {
            id: "b1".into(),
            name: "Test".into(),
            lists: vec![
                List {
                    id: "l1".into(),
                    name: "Open".into(),
                    closed: false,
                    cards: vec![],
                },
                List {
                    id: "l2".into(),
                    name: "Archived".into(),
                    closed: true,
                    cards: vec![],
                },
            ],
            labels: vec![],
        };
        let names: Vec<_> = board.open_lists().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Open"]);
    }

    #[test]
    fn test_label_color_unknown_deserializes_as_other() {
        let label: Label =
            serde_json::from_str(r#"{"id":"x","name":"Bug","color":"chartreuse"}"#).unwrap();
        assert_eq!(label.color, Some(LabelColor::Other));
    }
}
