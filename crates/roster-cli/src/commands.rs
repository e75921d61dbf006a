use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{Level, debug, enabled, info, info_span, trace, warn};

use roster_ingest::{FileLoader, Roster, missing_columns};
use roster_model::RosterReport;
use roster_validate::checks::distinct_values;
use roster_validate::{
    Check, REQUIRED_COLUMNS, RuleResult, ValidationConfig, ValidationEngine, roster_report,
};

use crate::cli::ValidateArgs;
use crate::logging::redact_value;
use crate::summary::rules_table;
use crate::types::{BatchResult, FileResult};

pub fn run_rules() -> Result<()> {
    let engine = ValidationEngine::default();
    println!("{}", rules_table(engine.rules()));
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> BatchResult {
    let config = ValidationConfig::default()
        .with_minimum_members(args.min_members)
        .with_max_distinct_values(args.max_distinct);
    validate_files(&args.files, &config, args.fail_fast)
}

/// Validate each file in order; a file that cannot be processed is recorded
/// and the batch moves on unless `fail_fast` is set.
pub fn validate_files(paths: &[PathBuf], config: &ValidationConfig, fail_fast: bool) -> BatchResult {
    let engine = ValidationEngine::new(config);
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let span = info_span!("roster", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        let result = match validate_file(&engine, path) {
            Ok(report) => {
                info!(
                    member_rows = report.member_rows,
                    valid = report.valid,
                    failures = report.failure_count(),
                    duration_ms = start.elapsed().as_millis(),
                    "validation complete"
                );
                FileResult::checked(path.clone(), report)
            }
            Err(error) => {
                warn!(error = %format!("{error:#}"), "roster could not be processed");
                FileResult::failed(path.clone(), format!("{error:#}"))
            }
        };

        let stop = fail_fast && !result.is_valid();
        files.push(result);
        if stop {
            debug!("stopping at first failing roster");
            break;
        }
    }

    BatchResult {
        config: *config,
        files,
    }
}

/// Load, parse and validate a single roster file.
pub fn validate_file(engine: &ValidationEngine, path: &Path) -> Result<RosterReport> {
    let mut roster = Roster::new();
    roster
        .load(&FileLoader::new(path))
        .with_context(|| format!("load roster: {}", path.display()))?;

    let header = roster
        .header()
        .with_context(|| format!("parse roster: {}", path.display()))?;
    let missing = missing_columns(header, &REQUIRED_COLUMNS);
    if !missing.is_empty() {
        bail!(
            "roster {} is missing required columns: {}",
            path.display(),
            missing.join(", ")
        );
    }

    let results = engine
        .validate(&mut roster)
        .with_context(|| format!("validate roster: {}", path.display()))?;

    if !roster.valid && enabled!(Level::TRACE) {
        trace_group_values(engine, &roster, &results)?;
    }

    Ok(roster_report(&roster, path.display().to_string(), &results))
}

/// Log the distinct values behind each failing uniqueness rule.
fn trace_group_values(
    engine: &ValidationEngine,
    roster: &Roster,
    results: &[RuleResult],
) -> Result<()> {
    let data_rows = roster.data_rows()?;
    for (rule, result) in engine.rules().iter().zip(results) {
        if result.outcome.passed() || !matches!(rule.check, Check::Uniqueness { .. }) {
            continue;
        }
        let column = roster.column_index(rule.column)?;
        let mut values: Vec<&str> = distinct_values(data_rows, column).into_iter().collect();
        values.sort_unstable();
        let shown: Vec<&str> = values.iter().map(|value| redact_value(value)).collect();
        trace!(rule = %result.rule, column = rule.column, values = ?shown, "distinct group values");
    }
    Ok(())
}
