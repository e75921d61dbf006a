//! Rule engine that runs the catalog against a roster.
//!
//! Business-rule failures never stop the run: every rule is evaluated and each
//! failing rule contributes its message. A structural problem (unparseable
//! rows, a missing column) aborts with an error instead.

use tracing::{debug, info};

use roster_ingest::{Roster, RowSource};
use roster_model::{Result, RosterReport, Row, RuleFailure};

use crate::config::ValidationConfig;
use crate::rules::{Rule, RuleId, RuleOutcome, rule_catalog};

/// Outcome of one rule within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleResult {
    pub rule: RuleId,
    pub outcome: RuleOutcome,
}

/// Ordered rule list plus the evaluation loop.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    rules: Vec<Rule>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl ValidationEngine {
    /// Engine over the standard catalog with the given thresholds.
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            rules: rule_catalog(config),
        }
    }

    /// Engine over an explicit rule list, run in the given order.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule and return one result per rule, in order.
    pub fn evaluate(&self, source: &dyn RowSource) -> Result<Vec<RuleResult>> {
        let rows = source.rows()?;
        let data_rows: &[Row] = rows.get(1..).unwrap_or_default();

        let mut results = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let column = source.column_index(rule.column)?;
            let outcome = rule.evaluate(data_rows, column);
            debug!(
                rule = %rule.id,
                column = rule.column,
                passed = outcome.passed(),
                "rule evaluated"
            );
            results.push(RuleResult {
                rule: rule.id,
                outcome,
            });
        }
        Ok(results)
    }

    /// Run the catalog, record the verdict on the roster and return the
    /// per-rule results.
    ///
    /// On error the roster's verdict fields are not meaningful.
    pub fn validate(&self, roster: &mut Roster) -> Result<Vec<RuleResult>> {
        roster.valid = true;
        roster.validation_messages = Vec::with_capacity(self.rules.len());

        let results = self.evaluate(&*roster)?;
        for result in &results {
            if let RuleOutcome::Fail(message) = result.outcome {
                roster.valid = false;
                roster.validation_messages.push(message.to_string());
            }
        }

        info!(
            member_rows = roster.data_rows().map_or(0, <[Row]>::len),
            valid = roster.valid,
            failures = roster.validation_messages.len(),
            "roster validated"
        );
        Ok(results)
    }
}

/// Report for a validated roster, each failure tagged with its rule code.
pub fn roster_report(
    roster: &Roster,
    source: impl Into<String>,
    results: &[RuleResult],
) -> RosterReport {
    let failures = results
        .iter()
        .filter_map(|result| match result.outcome {
            RuleOutcome::Fail(message) => Some(RuleFailure {
                code: result.rule.code().to_string(),
                message: message.to_string(),
            }),
            RuleOutcome::Pass => None,
        })
        .collect();
    RosterReport {
        source: source.into(),
        member_rows: roster.data_rows().map_or(0, <[Row]>::len),
        valid: roster.valid,
        failures,
    }
}
