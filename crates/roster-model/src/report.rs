use serde::{Deserialize, Serialize};

/// A failed rule as reported: its stable code and the fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    pub code: String,
    pub message: String,
}

/// Outcome of validating a single roster, suitable for machine output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterReport {
    /// Where the roster came from (file path or a caller-chosen label).
    pub source: String,
    /// Number of data rows, header excluded.
    pub member_rows: usize,
    pub valid: bool,
    /// Failures in rule order.
    pub failures: Vec<RuleFailure>,
}

impl RosterReport {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|failure| failure.message.as_str())
    }
}
