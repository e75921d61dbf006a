//! Distinct-value counting.

use std::collections::HashSet;

use roster_model::Row;

use super::field;

/// Distinct raw values in `column`. No trimming or case folding.
pub fn distinct_values(rows: &[Row], column: usize) -> HashSet<&str> {
    rows.iter().map(|row| field(row, column)).collect()
}

/// True if `column` holds more than `max_distinct` distinct values.
pub fn exceeds_distinct(rows: &[Row], column: usize, max_distinct: usize) -> bool {
    distinct_values(rows, column).len() > max_distinct
}
