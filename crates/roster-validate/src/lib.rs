//! Roster validation.
//!
//! A roster passes when all eight catalog rules pass. Failures are collected
//! as fixed messages in catalog order; structural problems surface as
//! [`RosterError`](roster_model::RosterError).

pub mod checks;
mod config;
mod engine;
mod rules;

pub use config::{MAX_DISTINCT_GROUP_VALUES, MINIMUM_ELIGIBLE_MEMBERS, ValidationConfig};
pub use engine::{RuleResult, ValidationEngine, roster_report};
pub use rules::{
    Check, INDUSTRY_COLUMN, REQUIRED_COLUMNS, ROLE_INDICATOR_COLUMN, ROSTER_ID_COLUMN, Rule,
    RuleId, RuleOutcome, STATE_CODE_COLUMN, TOKEN4_COLUMN, ZIP_CODE_COLUMN, rule_catalog,
};

use roster_ingest::Roster;
use roster_model::Result;

/// Validate a roster with the default thresholds.
///
/// Sets `roster.valid` and `roster.validation_messages`.
pub fn validate(roster: &mut Roster) -> Result<()> {
    ValidationEngine::default().validate(roster)?;
    Ok(())
}

/// Validate a roster with custom thresholds.
pub fn validate_with_config(roster: &mut Roster, config: &ValidationConfig) -> Result<()> {
    ValidationEngine::new(config).validate(roster)?;
    Ok(())
}
