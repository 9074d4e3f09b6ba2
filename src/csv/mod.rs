//! Parse CSV text into a table of strings
//!
//! The pipeline runs in three stages over a single scan of the input:
//! rows are cut at live newlines, each row is cut at live delimiters, and
//! every field is validated and unwrapped. A live separator is one that is
//! not inside a quoted field.
//!
//! Parsing is strict: a trailing delimiter, a row with a different number of
//! fields than the first, or a stray quote or newline outside a quoted field
//! stops the parse with a [`CsvError`](crate::CsvError).
mod cell;
mod outcome;
mod parser;
mod scan;
mod split;

pub use outcome::{parse_csv, ParseOutcome};
pub use parser::{parse, ParseOptions, Table};
