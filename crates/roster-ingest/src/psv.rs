//! Pipe-delimited row parsing.

use csv::ReaderBuilder;

use roster_model::{Result, RosterError, Row};

/// Field separator for roster files.
pub const PSV_DELIMITER: u8 = b'|';

/// Split raw roster text into rows, header first.
///
/// Blank lines are skipped. Every record must have the same field count as
/// the first one; values are kept verbatim, with no trimming.
pub fn parse_rows(raw: &str) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(PSV_DELIMITER)
        .has_headers(false)
        .flexible(false)
        .from_reader(raw.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(rows = rows.len(), "parsed roster rows");
    Ok(rows)
}

fn parse_error(err: csv::Error) -> RosterError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => RosterError::Parse {
            line: pos.as_ref().map_or(0, csv::Position::line),
            expected: *expected_len,
            found: *len,
        },
        _ => RosterError::Csv {
            message: err.to_string(),
        },
    }
}
