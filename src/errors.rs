use crate::Position;
use thiserror::Error;

/// Structural problems that abort a parse.
///
/// The message of each variant is fixed; the position is only available
/// through [`CsvError::position`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvError {
    #[error("Comma at the end of the row is not allowed")]
    TrailingDelimiter(Position),

    #[error("Rows must have the same number of fields")]
    InconsistentFieldCount(Position),

    #[error("Double quote needs to be enclosed in double quotes")]
    UnescapedQuoteOrNewline(Position),
}

impl CsvError {
    /// Where the problem was found
    pub fn position(&self) -> Position {
        match *self {
            CsvError::TrailingDelimiter(position)
            | CsvError::InconsistentFieldCount(position)
            | CsvError::UnescapedQuoteOrNewline(position) => position,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
