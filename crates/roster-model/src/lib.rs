pub mod error;
pub mod report;

pub use error::{Result, RosterError};
pub use report::{RosterReport, RuleFailure};

/// One record of a roster: field values in header order.
pub type Row = Vec<String>;
