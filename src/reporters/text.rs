//! Text (terminal) reporter with colors and formatting

use crate::checks::all_checks;
use crate::labels::LabelReport;
use crate::models::{AuditResult, Finding, Severity};
use crate::scoring::ScoreBand;
use crate::sprint::{SprintHealth, SprintReport};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Findings shown per category before the continuation marker
const MAX_SHOWN: usize = 10;

fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m", // Red
        Severity::High => "\x1b[91m",     // Light red
        Severity::Medium => "\x1b[33m",   // Yellow
        Severity::Low => "\x1b[34m",      // Blue
        Severity::Info => "\x1b[90m",     // Gray
    }
}

fn band_color(band: &ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "\x1b[32m",      // Green
        ScoreBand::Good => "\x1b[92m",           // Light green
        ScoreBand::NeedsAttention => "\x1b[33m", // Yellow
        ScoreBand::Critical => "\x1b[31m",       // Red
    }
}

fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
        Severity::Info => "[I]",
    }
}

fn header(out: &mut String, title: &str, subject: &str) {
    out.push_str(&format!("\n{BOLD}{title}{RESET} - {subject}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
}

fn score_footer(out: &mut String, score: u32, band: &ScoreBand) {
    let color = band_color(band);
    out.push_str(&format!(
        "\n{BOLD}Health Score: {score}/100{RESET}  {color}{BOLD}{band}{RESET}\n"
    ));
    out.push_str(&format!("{DIM}{}{RESET}\n", band.assessment()));
}

fn finding_line(finding: &Finding) -> String {
    let mut line = format!("{} ({})", finding.card_name, finding.list_name);
    if let Some(days) = finding.days_overdue {
        line.push_str(&format!(" - {days}d overdue"));
    }
    if let (Some(done), Some(total)) = (finding.completed_items, finding.total_items) {
        line.push_str(&format!(" - checklist {done}/{total}"));
    }
    line
}

fn truncated_section<T>(out: &mut String, items: &[T], mut render_item: impl FnMut(&T) -> String) {
    for item in items.iter().take(MAX_SHOWN) {
        out.push_str(&format!("    {}\n", render_item(item)));
    }
    let remaining = items.len().saturating_sub(MAX_SHOWN);
    if remaining > 0 {
        out.push_str(&format!("    {DIM}...and {remaining} more{RESET}\n"));
    }
}

/// Render a board audit as formatted terminal output
pub fn render_audit(result: &AuditResult) -> Result<String> {
    let mut out = String::new();

    header(&mut out, "Board Audit", &result.board_name);
    let s = &result.summary;
    out.push_str(&format!(
        "Lists: {}  Cards: {}  Findings: {}\n",
        s.total_lists,
        s.total_cards,
        result.total_findings()
    ));

    let mut summary_parts = Vec::new();
    if s.critical_issues > 0 {
        summary_parts.push(format!("\x1b[31m{} critical{RESET}", s.critical_issues));
    }
    if s.high_issues > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", s.high_issues));
    }
    if s.medium_issues > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", s.medium_issues));
    }
    if s.structural_issues > 0 {
        summary_parts.push(format!("{DIM}{} structural{RESET}", s.structural_issues));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!(
            "Issue categories: {}\n",
            summary_parts.join(" | ")
        ));
    }

    // Card findings by category, in check order.
    for check in all_checks() {
        let bucket = result.category(check.name());
        if bucket.is_empty() {
            continue;
        }
        let color = severity_color(&check.severity());
        out.push_str(&format!(
            "\n  {color}{}{RESET} {BOLD}{}{RESET} ({})\n",
            severity_tag(&check.severity()),
            check.description(),
            bucket.len()
        ));
        truncated_section(&mut out, bucket, finding_line);
    }

    // Structural issues.
    if !result.empty_lists.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Empty lists{RESET} ({})\n",
            result.empty_lists.len()
        ));
        truncated_section(&mut out, &result.empty_lists, |name| name.clone());
    }
    if !result.stale_lists.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Stale lists{RESET} ({})\n",
            result.stale_lists.len()
        ));
        truncated_section(&mut out, &result.stale_lists, |stale| {
            format!(
                "{} - newest card {}d old",
                stale.list_name, stale.newest_card_age_days
            )
        });
    }

    // Maintenance advice; no score impact.
    if !result.deletion_candidates.is_empty() {
        out.push_str(&format!(
            "\n  {DIM}Deletion candidates{RESET} ({}) - completed cards ready to archive\n",
            result.deletion_candidates.len()
        ));
        truncated_section(&mut out, &result.deletion_candidates, |c| {
            format!("{} ({}) - {}d old", c.card_name, c.list_name, c.age_days)
        });
    }

    if result.total_findings() == 0 && s.structural_issues == 0 {
        out.push_str(&format!("\n{DIM}No issues found.{RESET}\n"));
    }

    score_footer(&mut out, s.health_score, &result.band);
    Ok(out)
}

fn sprint_health_color(health: &SprintHealth) -> &'static str {
    match health {
        SprintHealth::Critical => "\x1b[31m",
        SprintHealth::NeedsAttention => "\x1b[33m",
        SprintHealth::Watch => "\x1b[93m",
        SprintHealth::Healthy => "\x1b[32m",
    }
}

/// Render a sprint analysis as formatted terminal output
pub fn render_sprint(report: &SprintReport) -> Result<String> {
    let mut out = String::new();

    header(&mut out, "Sprint Health", &report.board_name);
    if report.sprints.is_empty() {
        out.push_str("No sprint labels found.\n");
    }

    for (name, stats) in &report.sprints {
        let health = stats.health();
        let color = sprint_health_color(&health);
        out.push_str(&format!(
            "\n  {BOLD}{name}{RESET}  {color}{health}{RESET}\n"
        ));
        out.push_str(&format!(
            "    cards: {}  with due: {}  overdue: {}  due soon: {}  on track: {}\n",
            stats.total_cards, stats.cards_with_due, stats.overdue, stats.due_soon, stats.on_track
        ));
        if !stats.overdue_cards.is_empty() {
            truncated_section(&mut out, &stats.overdue_cards, |c| {
                format!(
                    "\x1b[31m{}d overdue{RESET}  {} ({})",
                    c.days_overdue, c.card_name, c.list_name
                )
            });
        }
    }

    let attention: Vec<&String> = report
        .sprints_needing_attention()
        .map(|(name, _)| name)
        .collect();
    if !attention.is_empty() {
        let names: Vec<&str> = attention.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!(
            "\n  {BOLD}Needs attention:{RESET} {}\n",
            names.join(", ")
        ));
    }

    if !report.unlabeled_cards.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Sprint-list cards without a sprint label{RESET} ({})\n",
            report.unlabeled_cards.len()
        ));
        truncated_section(&mut out, &report.unlabeled_cards, |c| {
            format!("{} ({})", c.card_name, c.list_name)
        });
    }

    score_footer(&mut out, report.health_score, &report.band);
    Ok(out)
}

/// Render a label analysis as formatted terminal output
pub fn render_labels(report: &LabelReport) -> Result<String> {
    let mut out = String::new();

    header(&mut out, "Label Audit", &report.board_name);
    out.push_str(&format!(
        "Labels: {}  Issues: {}\n",
        report.total_labels,
        report.total_issues()
    ));

    if !report.duplicates.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Duplicate names{RESET} ({} groups)\n",
            report.duplicates.len()
        ));
        truncated_section(&mut out, &report.duplicates, |group| {
            let colors: Vec<String> = group
                .labels
                .iter()
                .map(|l| l.color.clone().unwrap_or_else(|| "none".to_string()))
                .collect();
            format!("\"{}\" in {} colors: {}", group.name, group.labels.len(), colors.join(", "))
        });
    }

    if !report.similar.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Similar names{RESET} ({} pairs)\n",
            report.similar.len()
        ));
        truncated_section(&mut out, &report.similar, |pair| {
            format!("\"{}\" / \"{}\"", pair.first, pair.second)
        });
    }

    if !report.unused.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Unused labels{RESET} ({})\n",
            report.unused.len()
        ));
        truncated_section(&mut out, &report.unused, |l| {
            if l.name.trim().is_empty() {
                format!("(unnamed, {})", l.color.clone().unwrap_or_else(|| "no color".into()))
            } else {
                format!("\"{}\"", l.name)
            }
        });
    }

    if !report.unnamed.is_empty() {
        out.push_str(&format!(
            "\n  {BOLD}Unnamed labels{RESET} ({})\n",
            report.unnamed.len()
        ));
        truncated_section(&mut out, &report.unnamed, |l| {
            format!(
                "{} label used {} time(s)",
                l.color.clone().unwrap_or_else(|| "colorless".into()),
                l.usage
            )
        });
    }

    if report.total_issues() == 0 {
        out.push_str(&format!("\n{DIM}Label set is clean.{RESET}\n"));
    }

    score_footer(&mut out, report.health_score, &report.band);
    Ok(out)
}
