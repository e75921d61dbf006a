//! Roster ingestion: loading raw text, splitting it into rows, and resolving
//! header labels to field positions.

pub mod columns;
pub mod loader;
pub mod psv;
pub mod roster;

pub use columns::{missing_columns, resolve_column_index};
pub use loader::{FileLoader, MAX_ROSTER_FILE_SIZE, MemoryLoader, RawLoader};
pub use psv::{PSV_DELIMITER, parse_rows};
pub use roster::{Roster, RowSource};
