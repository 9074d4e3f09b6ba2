use super::parser::{parse, ParseOptions, Table};
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// The result of a parse as handed to callers outside Rust.
///
/// Serializes as `{"type": "success", "header": [..], "data": [[..]]}` or
/// `{"type": "error", "message": ".."}`. `header` is omitted outside header
/// mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParseOutcome {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<Vec<String>>,
        data: Vec<Vec<String>>,
    },
    Error {
        message: String,
    },
}

impl From<Result<Table>> for ParseOutcome {
    fn from(result: Result<Table>) -> Self {
        match result {
            Ok(Table { header, data }) => ParseOutcome::Success { header, data },
            Err(err) => ParseOutcome::Error {
                message: err.to_string(),
            },
        }
    }
}

/// Parse `text`, optionally splitting off the first row as the header.
pub fn parse_csv(text: &str, use_header: bool) -> ParseOutcome {
    parse(text, &ParseOptions::default().with_header(use_header)).into()
}
