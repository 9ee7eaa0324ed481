//! Test support utilities for dotmatrix.
//!
//! Small fonts and grid helpers shared by unit and integration tests; they
//! are not part of the rendering API.

use crate::{Font, Grid};

const TINY_DOTS: &str = "\
\\x20
...
...
...
i
.*.
...
.*.
o
***
*.*
***
";

/// A 3x3 font defining space, `i` and `o`.
pub fn tiny_font() -> Font {
    Font::from_dots("tiny", 3, 3, TINY_DOTS).expect("tiny font is well-formed")
}

/// Grid rows as strings, `*` for set dots and space otherwise.
pub fn rows(grid: &Grid) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|&dot| if dot { '*' } else { ' ' }).collect())
        .collect()
}
