//! Header label resolution.
//!
//! Labels match exactly: case, inner spacing and punctuation all count, so
//! `SIC / NAICS Code` and `SIC/NAICS Code` are different columns.

use roster_model::{Result, RosterError};

/// Zero-based field index of `label` in the header row.
///
/// When a label repeats, the first occurrence wins.
pub fn resolve_column_index(header: &[String], label: &str) -> Result<usize> {
    header
        .iter()
        .position(|name| name == label)
        .ok_or_else(|| RosterError::missing_column(label))
}

/// Labels from `labels` that the header does not contain, in input order.
pub fn missing_columns<'a>(header: &[String], labels: &[&'a str]) -> Vec<&'a str> {
    labels
        .iter()
        .copied()
        .filter(|label| resolve_column_index(header, label).is_err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_string()).collect()
    }

    #[test]
    fn test_resolve_column_index() {
        let header = header(&["Token4", "Roster ID Number", "Employer Zip Code"]);
        assert_eq!(resolve_column_index(&header, "Token4").unwrap(), 0);
        assert_eq!(resolve_column_index(&header, "Employer Zip Code").unwrap(), 2);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let header = header(&["token4"]);
        let result = resolve_column_index(&header, "Token4");
        assert!(matches!(result, Err(RosterError::MissingColumn { label }) if label == "Token4"));
    }

    #[test]
    fn test_resolve_first_duplicate_wins() {
        let header = header(&["A", "Token4", "Token4"]);
        assert_eq!(resolve_column_index(&header, "Token4").unwrap(), 1);
    }

    #[test]
    fn test_missing_columns() {
        let header = header(&["Token4", "Employer State Code"]);
        let missing = missing_columns(
            &header,
            &["Token4", "Roster ID Number", "Employer State Code", "Employer Zip Code"],
        );
        assert_eq!(missing, vec!["Roster ID Number", "Employer Zip Code"]);
    }
}
