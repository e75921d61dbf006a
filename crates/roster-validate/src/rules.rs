//! The fixed rule catalog.
//!
//! Rules run in catalog order and that order is the order of the messages a
//! failing roster reports.

use std::fmt;

use roster_model::Row;
use serde::Serialize;

use crate::checks::{exceeds_distinct, has_blank_value, has_minimum_members};
use crate::config::ValidationConfig;

pub const ROSTER_ID_COLUMN: &str = "Roster ID Number";
pub const TOKEN4_COLUMN: &str = "Token4";
pub const ROLE_INDICATOR_COLUMN: &str = "Eligible Member Role Indicator";
pub const INDUSTRY_COLUMN: &str = "SIC / NAICS Code";
pub const STATE_CODE_COLUMN: &str = "Employer State Code";
pub const ZIP_CODE_COLUMN: &str = "Employer Zip Code";

/// Every column the catalog reads, in header-check order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    ROSTER_ID_COLUMN,
    TOKEN4_COLUMN,
    ROLE_INDICATOR_COLUMN,
    INDUSTRY_COLUMN,
    STATE_CODE_COLUMN,
    ZIP_CODE_COLUMN,
];

/// Identifies one rule in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    RosterIdPresent,
    RosterIdUnique,
    MemberCount,
    RoleIndicatorPresent,
    IndustryPresent,
    IndustryUnique,
    StateCodeUnique,
    ZipCodeUnique,
}

impl RuleId {
    /// All rules in execution order.
    pub const ALL: [RuleId; 8] = [
        RuleId::RosterIdPresent,
        RuleId::RosterIdUnique,
        RuleId::MemberCount,
        RuleId::RoleIndicatorPresent,
        RuleId::IndustryPresent,
        RuleId::IndustryUnique,
        RuleId::StateCodeUnique,
        RuleId::ZipCodeUnique,
    ];

    /// Stable short code for reports and logs.
    pub const fn code(self) -> &'static str {
        match self {
            RuleId::RosterIdPresent => "RV001",
            RuleId::RosterIdUnique => "RV002",
            RuleId::MemberCount => "RV003",
            RuleId::RoleIndicatorPresent => "RV004",
            RuleId::IndustryPresent => "RV005",
            RuleId::IndustryUnique => "RV006",
            RuleId::StateCodeUnique => "RV007",
            RuleId::ZipCodeUnique => "RV008",
        }
    }

    pub const fn column(self) -> &'static str {
        match self {
            RuleId::RosterIdPresent | RuleId::RosterIdUnique => ROSTER_ID_COLUMN,
            RuleId::MemberCount => TOKEN4_COLUMN,
            RuleId::RoleIndicatorPresent => ROLE_INDICATOR_COLUMN,
            RuleId::IndustryPresent | RuleId::IndustryUnique => INDUSTRY_COLUMN,
            RuleId::StateCodeUnique => STATE_CODE_COLUMN,
            RuleId::ZipCodeUnique => ZIP_CODE_COLUMN,
        }
    }

    /// Message reported when the rule fails.
    pub const fn message(self) -> &'static str {
        match self {
            RuleId::RosterIdPresent => "Roster ID Number should not be blank",
            RuleId::RosterIdUnique => {
                "We cannot provide a Risk Predictor Score at this time because it appears that there is more than one Roster ID Number in the file.  Please submit a single unique census roster of Eligible Members in one employer group.  For every Eligible Member in the file, the Roster ID Number must be the same"
            }
            RuleId::MemberCount => {
                "Risk Predictor score cannot be provided because number of Eligible Members is less than the minimum"
            }
            RuleId::RoleIndicatorPresent => "Eligible Member Role Indicator should not be blank",
            RuleId::IndustryPresent => "SIC / NAICS should not be blank",
            RuleId::IndustryUnique => {
                "We cannot provide a Risk Predictor Score at this time because it appears that there is more than one SIC/NAICS in the file"
            }
            RuleId::StateCodeUnique => {
                "We cannot provide a Risk Predictor Score at this time because it appears that there is more than one Employer State Code in the file"
            }
            RuleId::ZipCodeUnique => {
                "We cannot provide a Risk Predictor Score at this time because it appears that there is more than one Zip Code in the file"
            }
        }
    }

    /// Short human description for rule listings.
    pub const fn description(self) -> &'static str {
        match self {
            RuleId::RosterIdPresent => "Roster ID Number is populated on every row",
            RuleId::RosterIdUnique => "File carries a single Roster ID Number",
            RuleId::MemberCount => "Enough distinct Token4 values",
            RuleId::RoleIndicatorPresent => "Role indicator is populated on every row",
            RuleId::IndustryPresent => "SIC / NAICS Code is populated on every row",
            RuleId::IndustryUnique => "File carries a single SIC / NAICS Code",
            RuleId::StateCodeUnique => "File carries a single Employer State Code",
            RuleId::ZipCodeUnique => "File carries a single Employer Zip Code",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Shape of the predicate a rule applies to its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// No field may be blank after removing spaces.
    Presence,
    /// At most `max_distinct` distinct raw values.
    Uniqueness { max_distinct: usize },
    /// At least `minimum` distinct raw values.
    MemberCount { minimum: usize },
}

impl Check {
    /// Apply the check to data rows (header excluded).
    pub fn passes(self, data_rows: &[Row], column: usize) -> bool {
        match self {
            Check::Presence => !has_blank_value(data_rows, column),
            Check::Uniqueness { max_distinct } => {
                !exceeds_distinct(data_rows, column, max_distinct)
            }
            Check::MemberCount { minimum } => has_minimum_members(data_rows, column, minimum),
        }
    }
}

/// Result of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail(&'static str),
}

impl RuleOutcome {
    pub fn passed(self) -> bool {
        matches!(self, RuleOutcome::Pass)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            RuleOutcome::Pass => None,
            RuleOutcome::Fail(message) => Some(message),
        }
    }
}

/// One catalog entry: which column, which check, what to say on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: RuleId,
    pub column: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub fn new(id: RuleId, check: Check) -> Self {
        Self {
            id,
            column: id.column(),
            check,
            message: id.message(),
        }
    }

    pub fn evaluate(&self, data_rows: &[Row], column: usize) -> RuleOutcome {
        if self.check.passes(data_rows, column) {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail(self.message)
        }
    }
}

/// Build the eight rules in execution order.
pub fn rule_catalog(config: &ValidationConfig) -> Vec<Rule> {
    let unique = Check::Uniqueness {
        max_distinct: config.max_distinct_values,
    };
    RuleId::ALL
        .into_iter()
        .map(|id| {
            let check = match id {
                RuleId::RosterIdPresent
                | RuleId::RoleIndicatorPresent
                | RuleId::IndustryPresent => Check::Presence,
                RuleId::MemberCount => Check::MemberCount {
                    minimum: config.minimum_members,
                },
                RuleId::RosterIdUnique
                | RuleId::IndustryUnique
                | RuleId::StateCodeUnique
                | RuleId::ZipCodeUnique => unique,
            };
            Rule::new(id, check)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_in_execution_order() {
        let catalog = rule_catalog(&ValidationConfig::default());
        let ids: Vec<RuleId> = catalog.iter().map(|rule| rule.id).collect();
        assert_eq!(ids, RuleId::ALL);
        assert_eq!(catalog[2].check, Check::MemberCount { minimum: 10 });
        assert_eq!(catalog[7].check, Check::Uniqueness { max_distinct: 1 });
    }

    #[test]
    fn catalog_covers_required_columns() {
        let catalog = rule_catalog(&ValidationConfig::default());
        for column in REQUIRED_COLUMNS {
            assert!(catalog.iter().any(|rule| rule.column == column), "{column}");
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = RuleId::ALL.iter().map(|id| id.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), RuleId::ALL.len());
    }

    #[test]
    fn outcome_carries_rule_message() {
        let rule = Rule::new(RuleId::IndustryPresent, Check::Presence);
        let rows = vec![vec![" ".to_string()]];
        assert_eq!(
            rule.evaluate(&rows, 0).message(),
            Some("SIC / NAICS should not be blank")
        );
        assert!(rule.evaluate(&[], 0).passed());
    }
}
