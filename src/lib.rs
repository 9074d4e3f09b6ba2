//! Strict CSV parsing.
//!
//! Text is split into rows and fields with a quote-aware scanner, every
//! row must carry the same number of fields, and quoted fields are
//! unwrapped. The first structural problem aborts the whole parse.
//!
//! ```
//! use strictcsv::{parse_csv, ParseOutcome};
//!
//! let outcome = parse_csv("name,city\n\"Doe, J\",Oslo\n", true);
//! assert_eq!(
//!     outcome,
//!     ParseOutcome::Success {
//!         header: Some(vec!["name".to_string(), "city".to_string()]),
//!         data: vec![vec!["Doe, J".to_string(), "Oslo".to_string()]],
//!     }
//! );
//! ```
pub mod csv;
mod errors;

pub use crate::csv::{parse, parse_csv, ParseOptions, ParseOutcome, Table};
pub use crate::errors::{CsvError, Result};

/// A location in the parsed table, counted from zero.
///
/// `row` is the logical record, which can span several lines when a quoted
/// field holds newlines. `column` is the field index within that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
