//! Eligible member population floor.

use roster_model::Row;

use super::uniqueness::distinct_values;

/// True if `column` holds at least `minimum` distinct values.
pub fn has_minimum_members(rows: &[Row], column: usize, minimum: usize) -> bool {
    distinct_values(rows, column).len() >= minimum
}
