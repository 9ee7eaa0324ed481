//! Composition of glyphs into a grid.
use std::ops::Range;

use crate::{
    error::{FontError, Result},
    font::Font,
    glyph::Glyph,
    grid::{Align, Grid},
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Substitute for characters the font does not define.
    pub default: char,
    /// Blank columns between neighbouring glyphs.
    pub intra: usize,
    /// Trim every glyph to its ink-bearing columns.
    pub proportional: bool,
    /// In proportional layout, blank glyphs take one column instead of two.
    pub narrow: bool,
    /// Pad or crop the result to this many columns.
    pub width: Option<usize>,
    pub align: Align,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default: ' ',
            intra: 1,
            proportional: false,
            narrow: false,
            width: None,
            align: Align::Center,
        }
    }
}

impl RenderOptions {
    pub fn fixed() -> Self {
        RenderOptions::default()
    }

    pub fn proportional() -> Self {
        Self {
            proportional: true,
            ..Default::default()
        }
    }

    pub fn with_intra(mut self, intra: usize) -> Self {
        self.intra = intra;
        self
    }

    pub fn with_default(mut self, default: char) -> Self {
        self.default = default;
        self
    }

    pub fn with_narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn with_width(mut self, width: usize, align: Align) -> Self {
        self.width = Some(width);
        self.align = align;
        self
    }
}

/// Parse a fallback character given as text; it must be exactly one character.
pub fn parse_default(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FontError::InvalidArgument(format!(
            "default {s:?} is not a single character"
        ))),
    }
}

fn resolve<'f>(font: &'f Font, ch: char, default: char) -> Result<&'f Glyph> {
    if let Some(glyph) = font.glyph(ch) {
        return Ok(glyph);
    }
    log::trace!("font {}: substituting {default:?} for {ch:?}", font.name());
    font.glyph(default).ok_or_else(|| {
        FontError::InvalidArgument(format!(
            "fallback glyph {default:?} is missing from font {}",
            font.name()
        ))
    })
}

/// Lay out `text` at its natural width.
pub(crate) fn compose(font: &Font, text: &str, options: &RenderOptions) -> Result<Grid> {
    let mut spans: Vec<(&Glyph, Range<usize>)> = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let glyph = resolve(font, ch, options.default)?;
        let span = glyph.span(font.width(), options.proportional, options.narrow);
        spans.push((glyph, span));
    }

    let natural = spans.iter().map(|(_, span)| span.len()).sum::<usize>()
        + spans.len().saturating_sub(1) * options.intra;

    let rows = (0..font.height())
        .map(|y| {
            let mut row = Vec::with_capacity(natural);
            for (i, (glyph, span)) in spans.iter().enumerate() {
                if i > 0 {
                    row.resize(row.len() + options.intra, false);
                }
                row.extend_from_slice(glyph.row_slice(y, span));
            }
            row
        })
        .collect();
    Ok(Grid::from_rows(rows))
}

/// Lay out `text` and fit it to `options.width` if one is set.
pub(crate) fn render(font: &Font, text: &str, options: &RenderOptions) -> Result<Grid> {
    let grid = compose(font, text, options)?;
    Ok(match options.width {
        Some(width) => grid.fit(width, options.align),
        None => grid,
    })
}
