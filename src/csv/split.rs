//! Row and field splitting over the live separator masks

use super::scan::{MaskSlice, Separators};
use itertools::Itertools;

/// One logical record, quotes still attached to its fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRow<'t> {
    pub text: &'t str,
    commas: &'t MaskSlice,
}

impl<'t> RawRow<'t> {
    /// Split the row at its live delimiters.
    ///
    /// Always yields at least one field, even for an empty row.
    pub fn fields(&self) -> Vec<&'t str> {
        cut(self.text, self.commas)
    }

    /// Whether the last byte of the row is a live delimiter
    pub fn ends_with_delimiter(&self) -> bool {
        self.commas
            .last_one()
            .is_some_and(|last| last + 1 == self.text.len())
    }
}

/// Split already-trimmed text into rows at its live newlines.
///
/// `separators` must come from scanning `text`. Empty text has no rows.
pub fn split_rows<'t>(text: &'t str, separators: &'t Separators) -> Vec<RawRow<'t>> {
    if text.is_empty() {
        return Vec::new();
    }
    spans(text.len(), &separators.newlines)
        .map(|(start, end)| RawRow {
            text: &text[start..end],
            commas: &separators.commas[start..end],
        })
        .collect()
}

/// Pieces of `text` between the set bits of `cuts`, which never include the
/// cut bytes themselves.
fn cut<'t>(text: &'t str, cuts: &MaskSlice) -> Vec<&'t str> {
    spans(text.len(), cuts)
        .map(|(start, end)| &text[start..end])
        .collect()
}

fn spans(len: usize, cuts: &MaskSlice) -> impl Iterator<Item = (usize, usize)> + '_ {
    let starts = std::iter::once(0).chain(cuts.iter_ones().map(|cut| cut + 1));
    let ends = cuts.iter_ones().chain(std::iter::once(len));
    starts.zip_eq(ends)
}
