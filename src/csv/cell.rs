//! Validate one raw field and strip its enclosing quotes

use super::scan::Special;
use crate::errors::{CsvError, Result};
use crate::Position;
use enumset::{enum_set, EnumSet};

/// Characters that may only appear inside a quote-enclosed field
const NEEDS_ENCLOSING: EnumSet<Special> = enum_set!(Special::Quote | Special::Newline);

/// The special characters present anywhere in `field`
pub fn specials(field: &str) -> EnumSet<Special> {
    field.bytes().filter_map(Special::from_byte).collect()
}

/// Whether the field starts and ends with its own pair of quotes
pub fn is_enclosed(field: &str) -> bool {
    field.len() >= 2 && field.starts_with('"') && field.ends_with('"')
}

/// Check a raw field and return its value.
///
/// Only the outer pair of quotes is removed; doubled quotes inside are kept
/// as they are.
pub fn normalize_field(raw: &str, position: Position) -> Result<String> {
    if is_enclosed(raw) {
        return Ok(raw[1..raw.len() - 1].to_string());
    }
    if !specials(raw).is_disjoint(NEEDS_ENCLOSING) {
        return Err(CsvError::UnescapedQuoteOrNewline(position));
    }
    Ok(raw.to_string())
}
