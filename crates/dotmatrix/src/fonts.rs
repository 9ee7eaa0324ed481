//! Built-in fonts.
use once_cell::sync::Lazy;

use crate::Font;

/// 5 rows by 3 columns: digits, letters and a little punctuation.
pub static FIFTEENDOTS: Lazy<Font> =
    Lazy::new(|| builtin("fifteendots", 5, 3, include_str!("../fonts/fifteendots.dots")));

/// 10 rows by 5 columns with descenders, Latin accents and some Greek,
/// Cyrillic and Canadian syllabics.
pub static FIFTYDOTS: Lazy<Font> =
    Lazy::new(|| builtin("fiftydots", 10, 5, include_str!("../fonts/fiftydots.dots")));

/// 8 rows by 3 columns.
pub static TWENTYFOURDOTS: Lazy<Font> = Lazy::new(|| {
    builtin(
        "twentyfourdots",
        8,
        3,
        include_str!("../fonts/twentyfourdots.dots"),
    )
});

fn builtin(name: &str, height: usize, width: usize, table: &str) -> Font {
    Font::from_dots(name, height, width, table)
        .unwrap_or_else(|e| panic!("built-in font {name} is malformed: {e}"))
}

pub fn available_fonts() -> [&'static Font; 3] {
    [&*FIFTEENDOTS, &*FIFTYDOTS, &*TWENTYFOURDOTS]
}

/// Look up a built-in font by name, ignoring case.
pub fn font_by_name(name: &str) -> Option<&'static Font> {
    available_fonts()
        .into_iter()
        .find(|font| font.name().eq_ignore_ascii_case(name))
}
