//! Health score computation
//!
//! Every audit variant uses the same deduction-then-floor pattern: start at
//! 100, subtract a weighted deduction per issue, saturate at 0. What differs
//! between variants is the weight table:
//!
//! ```text
//! Board audit    non-empty CRITICAL category  -20
//!                non-empty HIGH category      -10
//!                non-empty MEDIUM category     -5
//!                structural issue (each)      -15
//! Sprint audit   sprint issue (each)          -25
//!                overdue card (each)           -2
//! Label audit    duplicate group (each)       -10
//!                unnamed label (each)          -5
//!                similar pair (each)           -5
//!                unused label (each)           -2
//! ```
//!
//! Scores map to bands: >=90 EXCELLENT, >=70 GOOD, >=50 NEEDS_ATTENTION,
//! below that CRITICAL.

use serde::{Deserialize, Serialize};

use crate::models::Severity;

pub const MAX_SCORE: u32 = 100;

/// Qualitative band for a 0-100 health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsAttention,
    Critical,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            s if s >= 70 => ScoreBand::Good,
            s if s >= 50 => ScoreBand::NeedsAttention,
            _ => ScoreBand::Critical,
        }
    }

    /// One-line assessment shown in the text report footer.
    pub fn assessment(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Board is well-maintained and ready for production",
            ScoreBand::Good => "Minor issues detected, but generally healthy",
            ScoreBand::NeedsAttention => "Significant workflow issues detected",
            ScoreBand::Critical => "Severe structural problems affecting delivery",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "EXCELLENT"),
            ScoreBand::Good => write!(f, "GOOD"),
            ScoreBand::NeedsAttention => write!(f, "NEEDS_ATTENTION"),
            ScoreBand::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Deduction weights for the board-wide audit.
///
/// Card categories deduct once per non-empty category; structural issues
/// (empty or stale lists) deduct per issue instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardWeights {
    pub critical_category: u32,
    pub high_category: u32,
    pub medium_category: u32,
    pub structural_issue: u32,
}

impl Default for BoardWeights {
    fn default() -> Self {
        Self {
            critical_category: 20,
            high_category: 10,
            medium_category: 5,
            structural_issue: 15,
        }
    }
}

impl BoardWeights {
    pub fn category_weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical_category,
            Severity::High => self.high_category,
            Severity::Medium => self.medium_category,
            Severity::Low | Severity::Info => 0,
        }
    }
}

/// Deduction weights for the sprint audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SprintWeights {
    pub issue: u32,
    pub overdue_card: u32,
}

impl Default for SprintWeights {
    fn default() -> Self {
        Self {
            issue: 25,
            overdue_card: 2,
        }
    }
}

/// Deduction weights for the label audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelWeights {
    pub duplicate_group: u32,
    pub unused_label: u32,
    pub unnamed_label: u32,
    pub similar_pair: u32,
}

impl Default for LabelWeights {
    fn default() -> Self {
        Self {
            duplicate_group: 10,
            unused_label: 2,
            unnamed_label: 5,
            similar_pair: 5,
        }
    }
}

/// Apply a total deduction to the maximum score, flooring at 0.
pub fn apply_deductions(total_deduction: u32) -> u32 {
    MAX_SCORE.saturating_sub(total_deduction)
}
