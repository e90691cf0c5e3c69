//! Output reporters for audit results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::labels::LabelReport;
use crate::models::AuditResult;
use crate::sprint::SprintReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a board audit result in the specified format
pub fn audit_report(result: &AuditResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_audit(result),
        OutputFormat::Json => json::render_audit(result),
    }
}

/// Render a sprint analysis in the specified format
pub fn sprint_report(report: &SprintReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_sprint(report),
        OutputFormat::Json => json::render_sprint(report),
    }
}

/// Render a label analysis in the specified format
pub fn label_report(report: &LabelReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_labels(report),
        OutputFormat::Json => json::render_labels(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audit::BoardAuditor;
    use crate::config::AuditConfig;
    use crate::models::{Board, Card, Label, LabelColor, List};
    use chrono::{TimeZone, Utc};

    pub(crate) fn test_now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
    }

    /// A small board with one finding of each flavor the reporters show.
    pub(crate) fn test_board() -> Board {
        let bug_red = Label {
            id: "lab1".into(),
            name: "Bug".into(),
            color: Some(LabelColor::Red),
        };
        let bug_blue = Label {
            id: "lab2".into(),
            name: "bug".into(),
            color: Some(LabelColor::Blue),
        };
        let sprint = Label {
            id: "lab3".into(),
            name: "Sprint 1".into(),
            color: Some(LabelColor::Green),
        };

        let overdue = Card {
            id: "68fcf05e481843db13204397".into(),
            name: "Slipped task".into(),
            due: Some("2026-01-22T12:00:00.000Z".into()),
            labels: vec![sprint.clone(), bug_red.clone()],
            ..Default::default()
        };
        let done_no_due = Card {
            id: "68fcf05f481843db13204398".into(),
            name: "Finished thing".into(),
            ..Default::default()
        };

        Board {
            id: "board1".into(),
            name: "Test Board".into(),
            lists: vec![
                List {
                    id: "l1".into(),
                    name: "Sprint 1".into(),
                    closed: false,
                    cards: vec![overdue],
                },
                List {
                    id: "l2".into(),
                    name: "Done".into(),
                    closed: false,
                    cards: vec![done_no_due],
                },
                List {
                    id: "l3".into(),
                    name: "Icebox".into(),
                    closed: false,
                    cards: vec![],
                },
            ],
            labels: vec![bug_red, bug_blue, sprint],
        }
    }

    pub(crate) fn test_audit_result() -> AuditResult {
        let board = test_board();
        BoardAuditor::new(&board, test_now()).run()
    }

    pub(crate) fn test_sprint_report() -> crate::sprint::SprintReport {
        crate::sprint::analyze(&test_board(), None, test_now(), &AuditConfig::default())
    }

    pub(crate) fn test_label_report() -> LabelReport {
        crate::labels::analyze(&test_board(), &AuditConfig::default())
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("terminal").unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_dispatch_all_formats() {
        let result = test_audit_result();
        assert!(audit_report(&result, OutputFormat::Text).is_ok());
        assert!(audit_report(&result, OutputFormat::Json).is_ok());

        let sprint = test_sprint_report();
        assert!(sprint_report(&sprint, OutputFormat::Text).is_ok());
        assert!(sprint_report(&sprint, OutputFormat::Json).is_ok());

        let labels = test_label_report();
        assert!(label_report(&labels, OutputFormat::Text).is_ok());
        assert!(label_report(&labels, OutputFormat::Json).is_ok());
    }
}
