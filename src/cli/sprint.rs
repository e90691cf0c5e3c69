//! Sprint command - label-based sprint health

use anyhow::{Context, Result};
use chrono::Utc;
use std::str::FromStr;

use crate::config::load_audit_config;
use crate::reporters::{sprint_report, OutputFormat};

pub fn run(board_id: &str, label: Option<&str>, format: &str) -> Result<()> {
    let output_format = OutputFormat::from_str(format)?;

    let client = super::make_client()?;
    let board = client
        .fetch_snapshot(board_id)
        .with_context(|| format!("failed to fetch board {board_id}"))?;

    let config = load_audit_config(&std::env::current_dir()?);
    let report = crate::sprint::analyze(&board, label, Utc::now(), &config);

    println!("{}", sprint_report(&report, output_format)?);
    Ok(())
}
