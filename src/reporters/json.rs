//! JSON reporter
//!
//! Outputs each report as pretty-printed JSON for machine consumption,
//! piping to jq, or further processing.

use crate::labels::LabelReport;
use crate::models::AuditResult;
use crate::sprint::SprintReport;
use anyhow::Result;

pub fn render_audit(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_sprint(report: &SprintReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_labels(report: &LabelReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuditResult;
    use crate::reporters::tests::{test_audit_result, test_label_report, test_sprint_report};

    #[test]
    fn test_audit_round_trip_preserves_counts() {
        let result = test_audit_result();
        let json_str = render_audit(&result).expect("render JSON");
        let parsed: AuditResult = serde_json::from_str(&json_str).expect("parse JSON");

        assert_eq!(parsed.summary, result.summary);
        assert_eq!(parsed.findings.len(), result.findings.len());
        for (category, bucket) in &result.findings {
            assert_eq!(parsed.category(category).len(), bucket.len());
        }
        assert_eq!(parsed.band, result.band);
    }

    #[test]
    fn test_audit_json_structure() {
        let result = test_audit_result();
        let json_str = render_audit(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        assert_eq!(parsed["board_name"], "Test Board");
        assert!(parsed["summary"]["health_score"].is_u64());
        assert!(parsed["findings"]["done_no_due"].is_array());
        // Empty categories still serialize, as empty arrays.
        assert_eq!(
            parsed["findings"]["empty_checklist"].as_array().map(Vec::len),
            Some(0)
        );
    }

    #[test]
    fn test_sprint_round_trip() {
        let report = test_sprint_report();
        let json_str = render_sprint(&report).expect("render JSON");
        let parsed: SprintReport = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_label_round_trip() {
        let report = test_label_report();
        let json_str = render_labels(&report).expect("render JSON");
        let parsed: LabelReport = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_optional_finding_fields_omitted() {
        let result = test_audit_result();
        let json_str = render_audit(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");

        // done_no_due findings carry no overdue or checklist counts.
        let finding = &parsed["findings"]["done_no_due"][0];
        assert!(finding.get("days_overdue").is_none());
        assert!(finding.get("completed_items").is_none());
    }
}
