//! dotmatrix: text rendering with fixed-height bitmap fonts.
//! Glyph tables, fixed and proportional layout, width fitting, and grid,
//! coordinate and framed-string output.

pub mod dots;
mod error;
mod font;
pub mod fonts;
mod glyph;
mod grid;
mod render;
pub use error::{FontError, Result};
pub use font::{Font, FontBuilder, GlyphIssue, IssueKind};
pub use fonts::available_fonts;
pub use glyph::{Glyph, BLANK, INK};
pub use grid::{Align, CoordinateOptions, Grid};
pub use render::{parse_default, RenderOptions};

// Test utilities
pub mod test_support;
