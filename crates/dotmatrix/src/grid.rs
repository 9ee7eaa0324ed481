use std::{fmt, str::FromStr};

use crate::error::{FontError, Result};

/// Horizontal placement of rendered text inside a requested width.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Center,
    Left,
    Right,
}

impl Align {
    /// Blank columns added on the (left, right) to grow by `extra`.
    ///
    /// Centering gives the left side the smaller half.
    pub fn padding(self, extra: usize) -> (usize, usize) {
        match self {
            Align::Center => {
                let left = extra / 2;
                (left, extra - left)
            }
            Align::Left => (0, extra),
            Align::Right => (extra, 0),
        }
    }

    /// First kept column when `excess` columns have to be cut away.
    ///
    /// Centering cuts the smaller half on the left.
    pub fn crop_start(self, excess: usize) -> usize {
        match self {
            Align::Center => excess / 2,
            Align::Left => 0,
            Align::Right => excess,
        }
    }
}

impl FromStr for Align {
    type Err = FontError;

    /// Accepts anything starting with `c`, `l` or `r`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('c') => Ok(Align::Center),
            Some('l') => Ok(Align::Left),
            Some('r') => Ok(Align::Right),
            _ => Err(FontError::InvalidArgument(format!(
                "align {s:?} does not start with c, l or r"
            ))),
        }
    }
}

/// Which cells to project to coordinates and how to order and shift them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateOptions {
    /// Project set cells when `true`, unset cells when `false`.
    pub value: bool,
    /// Order by column, then row, instead of row by row.
    pub x_first: bool,
    pub x_offset: i64,
    pub y_offset: i64,
}

impl Default for CoordinateOptions {
    fn default() -> Self {
        Self {
            value: true,
            x_first: false,
            x_offset: 0,
            y_offset: 0,
        }
    }
}

/// Rectangular field of dots, `true` where a dot is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    /// Rows must all have the same length.
    pub(crate) fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { rows }
    }

    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![false; width]; height],
        }
    }

    /// Grid of the given size with exactly the listed cells set.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn from_coordinates(
        width: usize,
        height: usize,
        coordinates: impl IntoIterator<Item = (i64, i64)>,
    ) -> Self {
        let mut grid = Self::blank(width, height);
        for (x, y) in coordinates {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if let Some(cell) = grid.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = true;
            }
        }
        grid
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<bool>> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Add blank columns on both sides.
    pub fn pad(&self, left: usize, right: usize) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut padded = Vec::with_capacity(left + row.len() + right);
                padded.resize(left, false);
                padded.extend_from_slice(row);
                padded.resize(left + row.len() + right, false);
                padded
            })
            .collect();
        Grid { rows }
    }

    /// Keep columns `start..start + width`.
    ///
    /// Columns past the end are not padded, so rows come out shorter than
    /// `width` when the range reaches beyond the grid.
    pub fn crop(&self, start: usize, width: usize) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let start = start.min(row.len());
                let end = start.saturating_add(width).min(row.len());
                row[start..end].to_vec()
            })
            .collect();
        Grid { rows }
    }

    /// Pad or crop to exactly `width` columns.
    pub fn fit(&self, width: usize, align: Align) -> Grid {
        let natural = self.width();
        if width >= natural {
            let (left, right) = align.padding(width - natural);
            self.pad(left, right)
        } else {
            self.crop(align.crop_start(natural - width), width)
        }
    }

    /// Row-major `(x, y)` pairs of the cells equal to `options.value`.
    pub fn coordinates(&self, options: &CoordinateOptions) -> Vec<(i64, i64)> {
        let mut coords: Vec<(i64, i64)> = self
            .rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, dot)| **dot == options.value)
                    .map(move |(x, _)| {
                        (x as i64 + options.x_offset, y as i64 + options.y_offset)
                    })
            })
            .collect();
        if options.x_first {
            coords.sort_unstable();
        }
        coords
    }

    /// One line per row, `*` for set dots, framed by the borders.
    pub fn to_framed_string(&self, left_border: &str, right_border: &str) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(left_border);
            out.extend(row.iter().map(|&dot| if dot { '*' } else { ' ' }));
            out.push_str(right_border);
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_framed_string("", ""))
    }
}
