use std::ops::{Range, RangeInclusive};

use crate::error::{FontError, Result};

/// Marker for a set dot in textual glyph rows.
pub const INK: char = '*';
/// Marker for an unset dot in textual glyph rows.
pub const BLANK: char = '.';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Raster rows, top row first. `true` is an ink dot.
    rows: Vec<Vec<bool>>,
}

impl Glyph {
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Build a glyph from rows of `*` (ink) and `.` (blank) markers.
    pub fn from_pattern(rows: &[&str]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|row| parse_row(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|dot| !dot))
    }

    /// Leftmost and rightmost columns below `width` that carry ink in any row.
    pub fn ink_columns(&self, width: usize) -> Option<RangeInclusive<usize>> {
        let inked = |x: usize| self.rows.iter().any(|row| row.get(x).copied().unwrap_or(false));
        let first = (0..width).find(|&x| inked(x))?;
        let last = (first..width).rev().find(|&x| inked(x))?;
        Some(first..=last)
    }

    /// Columns this glyph contributes to a line of text.
    ///
    /// Fixed layout always takes the full cell. Proportional layout trims to
    /// the ink-bearing columns; a glyph without ink keeps one column when
    /// `narrow`, two otherwise.
    pub fn span(&self, width: usize, proportional: bool, narrow: bool) -> Range<usize> {
        if !proportional {
            return 0..width;
        }
        match self.ink_columns(width) {
            Some(cols) => *cols.start()..*cols.end() + 1,
            None if narrow => 0..1,
            None => 0..2,
        }
    }

    /// The part of row `y` inside `span`, clamped to the row length.
    pub fn row_slice(&self, y: usize, span: &Range<usize>) -> &[bool] {
        let Some(row) = self.rows.get(y) else {
            return &[];
        };
        let end = span.end.min(row.len());
        let start = span.start.min(end);
        &row[start..end]
    }
}

pub(crate) fn parse_row(row: &str) -> Result<Vec<bool>> {
    row.chars()
        .map(|c| match c {
            INK => Ok(true),
            BLANK => Ok(false),
            other => Err(FontError::Parse(format!(
                "unexpected dot marker {other:?} in row {row:?}"
            ))),
        })
        .collect()
}
