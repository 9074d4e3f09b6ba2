//! Locate the separators that actually split the text
//!
//! A separator is live when it is not inside a quoted region. A quote opens a
//! region only at the start of a field. Inside a region `""` is an escaped
//! quote and any other quote closes it; the rest of the field is then
//! unquoted and further quotes in it are literal.

use bitvec::prelude::*;
use enumset::EnumSetType;

pub type Mask = BitVec<u64, Lsb0>;
pub type MaskSlice = BitSlice<u64, Lsb0>;

/// The bytes that carry meaning in CSV
#[derive(EnumSetType, Debug)]
pub enum Special {
    Quote,
    Comma,
    Newline,
}
impl Special {
    pub fn from_byte(byte: u8) -> Option<Special> {
        match byte {
            b'"' => Some(Special::Quote),
            b',' => Some(Special::Comma),
            b'\n' => Some(Special::Newline),
            _ => None,
        }
    }
}

/// Live delimiters and newlines, one bit per byte of the scanned text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Separators {
    pub commas: Mask,
    pub newlines: Mask,
    /// The text ended while still inside a quoted field
    pub unterminated: bool,
}

impl Separators {
    pub fn scan(raw: &[u8]) -> Self {
        let mut this = Self {
            commas: Mask::repeat(false, raw.len()),
            newlines: Mask::repeat(false, raw.len()),
            unterminated: false,
        };
        let mut within_quotes = false;
        let mut field_start = true;
        let mut i = 0;

        while i < raw.len() {
            let at_field_start = std::mem::replace(&mut field_start, false);
            match (Special::from_byte(raw[i]), within_quotes) {
                (Some(Special::Quote), false) => within_quotes = at_field_start,
                (Some(Special::Quote), true) => match raw.get(i + 1).copied() {
                    // Escaped quote, skip its second half
                    Some(b'"') => i += 1,
                    _ => within_quotes = false,
                },
                (Some(Special::Comma), false) => {
                    this.commas.set(i, true);
                    field_start = true;
                }
                (Some(Special::Newline), false) => {
                    this.newlines.set(i, true);
                    field_start = true;
                }
                _ => {}
            }
            i += 1;
        }
        this.unterminated = within_quotes;
        this
    }
}
