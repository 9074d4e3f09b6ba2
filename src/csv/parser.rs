use super::cell::normalize_field;
use super::scan::Separators;
use super::split::split_rows;
use crate::errors::{CsvError, Result};
use crate::Position;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Settings for a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Split the first row off as the header
    pub use_header: bool,
}

impl ParseOptions {
    pub fn with_header(mut self, use_header: bool) -> Self {
        self.use_header = use_header;
        self
    }
}

/// A parsed table. Every row has the same number of fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Only set in header mode, and only when there was a row to take
    pub header: Option<Vec<String>>,
    pub data: Vec<Vec<String>>,
}

impl Table {
    fn assemble(rows: Vec<Vec<String>>, use_header: bool) -> Self {
        if !use_header {
            return Self {
                header: None,
                data: rows,
            };
        }
        let mut rows = rows.into_iter();
        let header = rows.next();
        if header.is_none() {
            debug!("Header requested but the input has no rows");
        }
        Self {
            header,
            data: rows.collect(),
        }
    }
}

/// Parse CSV text into a [`Table`].
///
/// Trailing whitespace at the very end of `text` is ignored. For every row in
/// order the trailing delimiter is checked first, then the field count, then
/// each field; the first problem found is returned and nothing else is
/// examined.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Table> {
    let text = text.trim_end();
    let separators = Separators::scan(text.as_bytes());
    if separators.unterminated {
        debug!("Input ends inside a quoted field");
    }
    let rows = split_rows(text, &separators);
    debug!("Split {} bytes into {} rows", text.len(), rows.len());

    let mut expected_fields = None;
    let mut table = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        let fields = row.fields();
        trace!("Row {row_index} has {} fields", fields.len());

        if row.ends_with_delimiter() {
            return Err(reject(CsvError::TrailingDelimiter(Position::new(
                row_index,
                fields.len() - 1,
            ))));
        }

        let expected = *expected_fields.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(reject(CsvError::InconsistentFieldCount(Position::new(
                row_index,
                expected.min(fields.len()),
            ))));
        }

        let cells = fields
            .iter()
            .enumerate()
            .map(|(column, raw)| normalize_field(raw, Position::new(row_index, column)))
            .collect::<Result<Vec<_>>>()
            .map_err(reject)?;
        table.push(cells);
    }

    Ok(Table::assemble(table, options.use_header))
}

fn reject(err: CsvError) -> CsvError {
    debug!("Rejecting input at {:?}: {}", err.position(), err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|field| field.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse() {
        let parsed = parse("a,b\nc,d\n", &ParseOptions::default()).unwrap();
        assert_eq!(
            parsed,
            Table {
                header: None,
                data: table(&[&["a", "b"], &["c", "d"]]),
            }
        );
    }

    #[test]
    fn test_parse_with_header() {
        let options = ParseOptions::default().with_header(true);
        let parsed = parse("a,b\nc,d\ne,f", &options).unwrap();
        assert_eq!(parsed.header, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(parsed.data, table(&[&["c", "d"], &["e", "f"]]));
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse("", &ParseOptions::default()).unwrap();
        assert_eq!(parsed, Table::default());

        let parsed = parse(" \n\n", &ParseOptions::default().with_header(true)).unwrap();
        assert_eq!(parsed, Table::default());
    }

    #[test]
    fn test_trailing_delimiter_position() {
        let err = parse("a,b\nc,d,\n", &ParseOptions::default()).unwrap_err();
        assert_eq!(err, CsvError::TrailingDelimiter(Position::new(1, 2)));
    }

    #[test]
    fn test_trailing_delimiter_before_field_count() {
        // Row 1 has both problems, the delimiter wins
        let err = parse("a,b\nc,d,e,\n", &ParseOptions::default()).unwrap_err();
        assert_eq!(err, CsvError::TrailingDelimiter(Position::new(1, 3)));
    }

    #[test]
    fn test_field_count_position() {
        let err = parse("a,b,c\nd,e\nf,g,h", &ParseOptions::default()).unwrap_err();
        assert_eq!(err, CsvError::InconsistentFieldCount(Position::new(1, 2)));
    }

    #[test]
    fn test_field_count_before_quotes() {
        let err = parse("a,b\nc\",d,e", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, CsvError::InconsistentFieldCount(_)));
    }

    #[test]
    fn test_first_error_wins() {
        let err = parse("a,b\"\nc,d,\ne", &ParseOptions::default()).unwrap_err();
        assert_eq!(err, CsvError::UnescapedQuoteOrNewline(Position::new(0, 1)));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse("a\n\"c,d\ne", &ParseOptions::default()).unwrap_err();
        assert_eq!(err, CsvError::UnescapedQuoteOrNewline(Position::new(1, 0)));
    }

    #[test]
    fn test_options_from_serde() {
        let options: ParseOptions = serde_json::from_str(r#"{"use_header": true}"#).unwrap();
        assert_eq!(options, ParseOptions::default().with_header(true));
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
    }
}
