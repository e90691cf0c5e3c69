//! CLI command definitions and handlers

mod audit;
mod labels;
mod sprint;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Boardcheck - Trello board health audits
#[derive(Parser, Debug)]
#[command(name = "boardcheck")]
#[command(
    version,
    about = "Audit Trello boards for hygiene issues — missing due dates, overdue work, stale lists, sprint slippage, and label clutter",
    after_help = "\
Examples:
  boardcheck audit BOARD_ID                      Full board audit
  boardcheck audit BOARD_ID --format json        JSON output for scripting
  boardcheck audit BOARD_ID --pattern '^PF-\\d+'  Enforce a card naming scheme
  boardcheck sprint BOARD_ID                     Sprint health by label
  boardcheck sprint BOARD_ID --label iteration   Custom sprint-label filter
  boardcheck labels BOARD_ID                     Label hygiene report

Credentials: set TRELLO_API_KEY and TRELLO_TOKEN, or put them in
~/.config/boardcheck/config.toml under [api]."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full board audit: card rules, structure, health score
    Audit {
        /// Board ID (from the board URL)
        board_id: String,

        /// Regex card names must match; non-matching cards are flagged
        #[arg(long, short = 'p')]
        pattern: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Analyze sprint health from sprint labels
    Sprint {
        /// Board ID (from the board URL)
        board_id: String,

        /// Sprint-label substring filter (default: "sprint" or S-numbers)
        #[arg(long, short = 'l')]
        label: Option<String>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Check labels for duplicates, near-duplicates, and dead weight
    Labels {
        /// Board ID (from the board URL)
        board_id: String,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Audit {
            board_id,
            pattern,
            format,
        } => audit::run(&board_id, pattern.as_deref(), &format),
        Commands::Sprint {
            board_id,
            label,
            format,
        } => sprint::run(&board_id, label.as_deref(), &format),
        Commands::Labels { board_id, format } => labels::run(&board_id, &format),
    }
}

/// Build an authenticated client from the user's configuration.
pub(crate) fn make_client() -> Result<crate::client::TrelloClient> {
    let config = crate::config::UserConfig::load()?;
    let (key, token) = config.credentials()?;
    Ok(crate::client::TrelloClient::new(
        config.base_url(),
        key,
        token,
    ))
}
