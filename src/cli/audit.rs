//! Audit command - full board health audit

use anyhow::{Context, Result};
use chrono::Utc;
use regex::Regex;
use std::str::FromStr;

use crate::audit::BoardAuditor;
use crate::config::load_audit_config;
use crate::reporters::{audit_report, OutputFormat};

pub fn run(board_id: &str, pattern: Option<&str>, format: &str) -> Result<()> {
    let output_format = OutputFormat::from_str(format)?;
    let pattern = pattern
        .map(Regex::new)
        .transpose()
        .context("invalid --pattern regex")?;

    let client = super::make_client()?;
    let board = client
        .fetch_snapshot(board_id)
        .with_context(|| format!("failed to fetch board {board_id}"))?;

    let config = load_audit_config(&std::env::current_dir()?);
    let mut auditor = BoardAuditor::new(&board, Utc::now()).with_config(config);
    if let Some(pattern) = pattern {
        auditor = auditor.with_pattern(pattern);
    }
    let result = auditor.run();

    println!("{}", audit_report(&result, output_format)?);
    Ok(())
}
