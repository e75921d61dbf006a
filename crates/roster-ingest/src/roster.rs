//! The roster under validation and its cached row view.

use std::cell::OnceCell;

use roster_model::{Result, RosterError, Row};

use crate::columns::resolve_column_index;
use crate::loader::RawLoader;
use crate::psv::parse_rows;

/// Parsed rows plus column lookup, as consumed by the validation engine.
pub trait RowSource {
    /// All rows, header first.
    fn rows(&self) -> Result<&[Row]>;

    /// Zero-based index of a header label.
    fn column_index(&self, label: &str) -> Result<usize> {
        let header = self.rows()?.first().ok_or(RosterError::MissingHeader)?;
        resolve_column_index(header, label)
    }
}

impl RowSource for Vec<Row> {
    fn rows(&self) -> Result<&[Row]> {
        Ok(self.as_slice())
    }
}

/// A submitted census roster.
///
/// `valid` and `validation_messages` are only meaningful after a successful
/// validation run.
#[derive(Debug, Default)]
pub struct Roster {
    raw: String,
    rows: OnceCell<Vec<Row>>,
    pub valid: bool,
    pub validation_messages: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Replace the raw text from `loader`, clearing cached rows and any
    /// previous verdict.
    pub fn load(&mut self, loader: &dyn RawLoader) -> Result<()> {
        self.raw = loader.load()?;
        self.rows = OnceCell::new();
        self.valid = false;
        self.validation_messages.clear();
        Ok(())
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed rows, header first. Parsing happens once per load.
    pub fn rows(&self) -> Result<&[Row]> {
        if let Some(rows) = self.rows.get() {
            return Ok(rows);
        }
        let parsed = parse_rows(&self.raw)?;
        Ok(self.rows.get_or_init(|| parsed))
    }

    pub fn header(&self) -> Result<&[String]> {
        self.rows()?
            .first()
            .map(Vec::as_slice)
            .ok_or(RosterError::MissingHeader)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> Result<&[Row]> {
        Ok(self.rows()?.get(1..).unwrap_or_default())
    }

    pub fn column_index(&self, label: &str) -> Result<usize> {
        resolve_column_index(self.header()?, label)
    }
}

impl RowSource for Roster {
    fn rows(&self) -> Result<&[Row]> {
        Roster::rows(self)
    }

    fn column_index(&self, label: &str) -> Result<usize> {
        Roster::column_index(self, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::MemoryLoader;

    #[test]
    fn test_rows_are_cached() {
        let roster = Roster::from_raw("Token4\nt1\nt2");
        let first = roster.rows().unwrap().as_ptr();
        let second = roster.rows().unwrap().as_ptr();
        assert_eq!(first, second);
        assert_eq!(roster.data_rows().unwrap().len(), 2);
    }

    #[test]
    fn test_load_resets_state() {
        let mut roster = Roster::from_raw("Token4\nt1");
        assert_eq!(roster.data_rows().unwrap().len(), 1);
        roster.valid = true;
        roster.validation_messages.push("stale".to_string());

        roster
            .load(&MemoryLoader::new("Token4\nt1\nt2\nt3"))
            .unwrap();

        assert_eq!(roster.data_rows().unwrap().len(), 3);
        assert!(!roster.valid);
        assert!(roster.validation_messages.is_empty());
    }

    #[test]
    fn test_empty_roster_has_no_header() {
        let roster = Roster::new();
        assert!(roster.rows().unwrap().is_empty());
        assert!(roster.data_rows().unwrap().is_empty());
        assert!(matches!(
            roster.column_index("Token4"),
            Err(RosterError::MissingHeader)
        ));
    }

    #[test]
    fn test_parse_error_is_not_cached() {
        let roster = Roster::from_raw("A|B\nX\n");
        assert!(roster.rows().is_err());
        assert!(roster.rows().is_err());
    }

    #[test]
    fn test_column_index() {
        let roster = Roster::from_raw("A|Token4\nx|t1");
        assert_eq!(roster.column_index("Token4").unwrap(), 1);
        assert!(matches!(
            roster.column_index("Roster ID Number"),
            Err(RosterError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_row_source_for_vec() {
        let rows: Vec<Row> = vec![
            vec!["Token4".to_string(), "A".to_string()],
            vec!["t1".to_string(), "x".to_string()],
        ];
        assert_eq!(RowSource::column_index(&rows, "A").unwrap(), 1);
        assert_eq!(RowSource::rows(&rows).unwrap().len(), 2);
    }
}
