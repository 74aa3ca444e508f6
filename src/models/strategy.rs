//! Strategy entity, read-only input to the scoring core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk appetite attached to a strategy; surfaces in the signal rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// A user-owned trading strategy record.
///
/// The core never writes strategies; they belong to the external store and
/// arrive here as input to an analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub id: Option<i64>,
    pub user_id: String,
    pub name: String,
    pub symbols: Vec<String>,
    pub risk_level: RiskLevel,
    pub stop_loss_percentage: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Strategy {
    /// Symbol the analysis targets: the first configured symbol, or a
    /// placeholder when the list is empty.
    pub fn primary_symbol(&self) -> &str {
        self.symbols.first().map(String::as_str).unwrap_or("UNKNOWN")
    }
}
