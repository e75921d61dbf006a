//! Thresholds used by the rule catalog.

use serde::{Deserialize, Serialize};

/// Distinct values allowed in a single-group column (roster ID, industry,
/// state, zip).
pub const MAX_DISTINCT_GROUP_VALUES: usize = 1;

/// Fewest distinct `Token4` values a roster may carry.
pub const MINIMUM_ELIGIBLE_MEMBERS: usize = 10;

/// Tunable limits for the rule catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Upper bound on distinct values for every uniqueness rule.
    #[serde(default = "default_max_distinct_values")]
    pub max_distinct_values: usize,
    /// Lower bound on distinct eligible members.
    #[serde(default = "default_minimum_members")]
    pub minimum_members: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_distinct_values: MAX_DISTINCT_GROUP_VALUES,
            minimum_members: MINIMUM_ELIGIBLE_MEMBERS,
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn with_max_distinct_values(mut self, max_distinct_values: usize) -> Self {
        self.max_distinct_values = max_distinct_values;
        self
    }

    #[must_use]
    pub fn with_minimum_members(mut self, minimum_members: usize) -> Self {
        self.minimum_members = minimum_members;
        self
    }
}

fn default_max_distinct_values() -> usize {
    MAX_DISTINCT_GROUP_VALUES
}

fn default_minimum_members() -> usize {
    MINIMUM_ELIGIBLE_MEMBERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ValidationConfig::default();
        assert_eq!(config.max_distinct_values, 1);
        assert_eq!(config.minimum_members, 10);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ValidationConfig =
            serde_json::from_str(r#"{"minimum_members": 25}"#).expect("deserialize config");
        assert_eq!(config.minimum_members, 25);
        assert_eq!(config.max_distinct_values, MAX_DISTINCT_GROUP_VALUES);
    }
}
