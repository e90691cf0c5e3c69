//! Boardcheck - Trello board health audits
//!
//! Library crate behind the `boardcheck` CLI. The analyzers are pure
//! functions over an in-memory [`models::Board`] snapshot: fetch one with
//! [`client::TrelloClient::fetch_snapshot`] (or build one by hand in tests),
//! then run the board audit, sprint analysis, or label analysis and render
//! the result with a reporter.

pub mod audit;
pub mod checks;
pub mod classifier;
pub mod cli;
pub mod client;
pub mod config;
pub mod labels;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod sprint;
