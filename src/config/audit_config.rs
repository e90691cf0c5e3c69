//! Audit threshold and weight configuration
//!
//! Loads per-project configuration from a `boardcheck.toml` file in the
//! working directory. Every field is optional; defaults match the stock
//! audit behavior.
//!
//! # Configuration Format
//!
//! ```toml
//! # boardcheck.toml
//!
//! [thresholds]
//! stale_days = 30
//! stale_exclude_keywords = ["done"]
//! deletion_age_days = 7
//! due_soon_days = 3
//!
//! [weights.board]
//! critical_category = 20
//! high_category = 10
//! medium_category = 5
//! structural_issue = 15
//!
//! [weights.sprint]
//! issue = 25
//! overdue_card = 2
//!
//! [weights.labels]
//! duplicate_group = 10
//! unused_label = 2
//! unnamed_label = 5
//! similar_pair = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::scoring::{BoardWeights, LabelWeights, SprintWeights};

pub const CONFIG_FILE: &str = "boardcheck.toml";

/// Age and date-window thresholds used by the audit variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A list is stale if no card was created within this many days
    pub stale_days: i64,
    /// Lists whose names contain any of these keywords are never stale.
    /// Only "done" by default; other completion-like names ("archive") are
    /// deliberately not exempted.
    pub stale_exclude_keywords: Vec<String>,
    /// Cards in done lists older than this are deletion candidates
    pub deletion_age_days: i64,
    /// Window for the sprint analyzer's due-soon bucket (inclusive)
    pub due_soon_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            stale_days: 30,
            stale_exclude_keywords: vec!["done".to_string()],
            deletion_age_days: 7,
            due_soon_days: 3,
        }
    }
}

impl Thresholds {
    /// Whether a list name is exempt from staleness detection.
    pub fn stale_exempt(&self, list_name: &str) -> bool {
        let name_lower = list_name.to_lowercase();
        self.stale_exclude_keywords
            .iter()
            .any(|kw| name_lower.contains(kw.as_str()))
    }
}

/// Deduction weight tables, one per audit variant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub board: BoardWeights,
    pub sprint: SprintWeights,
    pub labels: LabelWeights,
}

/// Full audit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub thresholds: Thresholds,
    pub weights: Weights,
}

/// Load audit configuration from `boardcheck.toml` in `dir`.
///
/// A missing file yields defaults; an unreadable or invalid file logs a
/// warning and yields defaults rather than aborting the audit.
pub fn load_audit_config(dir: &Path) -> AuditConfig {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!("no {} found, using default audit config", CONFIG_FILE);
        return AuditConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<AuditConfig>(&content) {
            Ok(config) => {
                debug!("loaded audit config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("invalid {}: {e}, using defaults", path.display());
                AuditConfig::default()
            }
        },
        Err(e) => {
            warn!("could not read {}: {e}, using defaults", path.display());
            AuditConfig::default()
        }
    }
}
