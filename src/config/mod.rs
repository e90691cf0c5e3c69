//! Configuration module for boardcheck
//!
//! This module handles:
//! - Project-level audit configuration (boardcheck.toml)
//! - Threshold and deduction-weight overrides
//! - API credentials (environment + user config file)

mod audit_config;
mod user_config;

pub use audit_config::{load_audit_config, AuditConfig, Thresholds, Weights};
pub use user_config::UserConfig;
