//! Labels command - label hygiene report

use anyhow::{Context, Result};
use std::str::FromStr;

use crate::config::load_audit_config;
use crate::reporters::{label_report, OutputFormat};

pub fn run(board_id: &str, format: &str) -> Result<()> {
    let output_format = OutputFormat::from_str(format)?;

    let client = super::make_client()?;
    let board = client
        .fetch_snapshot(board_id)
        .with_context(|| format!("failed to fetch board {board_id}"))?;

    let config = load_audit_config(&std::env::current_dir()?);
    let report = crate::labels::analyze(&board, &config);

    println!("{}", label_report(&report, output_format)?);
    Ok(())
}
