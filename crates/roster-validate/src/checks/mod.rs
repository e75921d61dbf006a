//! Column check shapes shared by the rule catalog.
//!
//! Every check looks at data rows only; callers strip the header first.

mod member_count;
mod presence;
mod uniqueness;

pub use member_count::has_minimum_members;
pub use presence::has_blank_value;
pub use uniqueness::{distinct_values, exceeds_distinct};

use roster_model::Row;

/// Field at `column`, or an empty string when the row is short.
fn field(row: &Row, column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}
