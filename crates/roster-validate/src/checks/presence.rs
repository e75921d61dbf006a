//! Required-field presence.

use roster_model::Row;

use super::field;

/// True if any row's field is empty once every space character is removed.
///
/// Only `' '` counts as blank; tabs and other whitespace are kept.
pub fn has_blank_value(rows: &[Row], column: usize) -> bool {
    rows.iter()
        .any(|row| field(row, column).chars().all(|ch| ch == ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Row> {
        values.iter().map(|value| vec![(*value).to_string()]).collect()
    }

    #[test]
    fn test_all_populated() {
        assert!(!has_blank_value(&rows(&["1", "1", "2"]), 0));
    }

    #[test]
    fn test_empty_value() {
        assert!(has_blank_value(&rows(&["1", "", "2"]), 0));
    }

    #[test]
    fn test_spaces_only_value() {
        assert!(has_blank_value(&rows(&["1", "   "]), 0));
    }

    #[test]
    fn test_inner_spaces_are_not_blank() {
        assert!(!has_blank_value(&rows(&[" 1 ", "A B"]), 0));
    }

    #[test]
    fn test_no_rows() {
        assert!(!has_blank_value(&[], 0));
    }
}
