use std::collections::HashMap;
use std::fmt;

use crate::{
    dots::parse_dots,
    error::{FontError, Result},
    glyph::Glyph,
    grid::{CoordinateOptions, Grid},
    render::{self, RenderOptions},
};

/// A fixed-height bitmap font.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone, Debug)]
pub struct Font {
    name: String,
    height: usize,
    width: usize,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn builder(name: impl Into<String>, height: usize, width: usize) -> FontBuilder {
        FontBuilder::new(name, height, width)
    }

    /// Build a font from a glyph table in the `.dots` text format.
    pub fn from_dots(
        name: impl Into<String>,
        height: usize,
        width: usize,
        text: &str,
    ) -> Result<Self> {
        FontBuilder::new(name, height, width).dots(text)?.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of dot rows of every glyph.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Nominal glyph width used by fixed (non-proportional) layout.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Defined characters in ascending order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Width in dots of `text` without any width fitting.
    ///
    /// `options.width` and `options.align` are ignored.
    pub fn number_of_pixels(&self, text: &str, options: &RenderOptions) -> Result<usize> {
        Ok(render::compose(self, text, options)?.width())
    }

    /// Render `text` into a grid of `height()` equally long rows.
    pub fn grid(&self, text: &str, options: &RenderOptions) -> Result<Grid> {
        render::render(self, text, options)
    }

    /// Coordinates of the rendered cells matching `projection.value`.
    pub fn coordinates(
        &self,
        text: &str,
        options: &RenderOptions,
        projection: &CoordinateOptions,
    ) -> Result<Vec<(i64, i64)>> {
        Ok(self.grid(text, options)?.coordinates(projection))
    }

    /// Render `text` as `*`/space lines framed by the given borders.
    pub fn grid_to_str(
        &self,
        text: &str,
        left_border: &str,
        right_border: &str,
        options: &RenderOptions,
    ) -> Result<String> {
        Ok(self
            .grid(text, options)?
            .to_framed_string(left_border, right_border))
    }
}

/// Integrity problem of a single glyph, found by [`FontBuilder::check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphIssue {
    pub ch: char,
    pub kind: IssueKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueKind {
    RowCount { expected: usize, found: usize },
    RowWidth { row: usize, expected: usize, found: usize },
}

impl fmt::Display for GlyphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::RowCount { expected, found } => write!(
                f,
                "{:?}: {found} rows, expected {expected}",
                self.ch
            ),
            IssueKind::RowWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "{:?}: row {row} is {found} dots wide, expected {expected}",
                self.ch
            ),
        }
    }
}

/// Collects glyphs in order and validates them into a [`Font`].
///
/// Adding a character that is already present replaces the earlier glyph.
pub struct FontBuilder {
    name: String,
    height: usize,
    width: usize,
    glyphs: Vec<(char, Glyph)>,
}

impl FontBuilder {
    pub fn new(name: impl Into<String>, height: usize, width: usize) -> Self {
        Self {
            name: name.into(),
            height,
            width,
            glyphs: Vec::new(),
        }
    }

    pub fn glyph(mut self, ch: char, glyph: Glyph) -> Self {
        self.glyphs.push((ch, glyph));
        self
    }

    pub fn glyphs(mut self, glyphs: impl IntoIterator<Item = (char, Glyph)>) -> Self {
        self.glyphs.extend(glyphs);
        self
    }

    /// Append every block of a `.dots` glyph table.
    pub fn dots(self, text: &str) -> Result<Self> {
        Ok(self.glyphs(parse_dots(text)?))
    }

    fn table(&self) -> HashMap<char, &Glyph> {
        let mut table = HashMap::with_capacity(self.glyphs.len());
        for (ch, glyph) in &self.glyphs {
            table.insert(*ch, glyph);
        }
        table
    }

    /// Rasters whose shape disagrees with the nominal font size, by character.
    pub fn check(&self) -> Vec<GlyphIssue> {
        let mut issues = Vec::new();
        let mut table: Vec<(char, &Glyph)> = self.table().into_iter().collect();
        table.sort_unstable_by_key(|(ch, _)| *ch);
        for (ch, glyph) in table {
            for (row, dots) in glyph.rows().iter().enumerate() {
                if dots.len() != self.width {
                    issues.push(GlyphIssue {
                        ch,
                        kind: IssueKind::RowWidth {
                            row,
                            expected: self.width,
                            found: dots.len(),
                        },
                    });
                }
            }
            if glyph.height() != self.height {
                issues.push(GlyphIssue {
                    ch,
                    kind: IssueKind::RowCount {
                        expected: self.height,
                        found: glyph.height(),
                    },
                });
            }
        }
        issues
    }

    pub fn build(self) -> Result<Font> {
        if self.height == 0 || self.width == 0 {
            return Err(FontError::InvalidArgument(format!(
                "font {} must be at least one dot high and wide, got {}x{}",
                self.name, self.height, self.width
            )));
        }
        let issues = self.check();
        for issue in &issues {
            log::warn!("font {}: {issue}", self.name);
        }
        if let Some(issue) = issues.into_iter().next() {
            return Err(FontError::MalformedGlyph(issue));
        }

        let mut glyphs = HashMap::with_capacity(self.glyphs.len());
        for (ch, glyph) in self.glyphs {
            glyphs.insert(ch, glyph);
        }
        log::debug!(
            "built font {} ({}x{}, {} glyphs)",
            self.name,
            self.height,
            self.width,
            glyphs.len()
        );
        Ok(Font {
            name: self.name,
            height: self.height,
            width: self.width,
            glyphs,
        })
    }
}
