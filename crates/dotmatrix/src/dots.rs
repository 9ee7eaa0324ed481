//! Glyph table text format.
//!
//! A table is a sequence of blocks. Each block starts with a key line holding
//! exactly one character, followed by the raster rows of that glyph drawn with
//! `*` (ink) and `.` (blank), top row first:
//!
//! ```text
//! i
//! .*.
//! ...
//! .*.
//! .*.
//! ```
//!
//! Keys that are awkward to write literally use an escape: `\x20` for space,
//! `\u{7f}` for any scalar value, `\\` for a backslash. Empty lines are
//! ignored. Since a one-character line is always a key, fonts that are a
//! single column wide cannot be written in this format.
use crate::{
    error::{FontError, Result},
    glyph::{parse_row, Glyph},
};

/// Parse a glyph table into `(key, glyph)` pairs in source order.
///
/// Duplicate keys are kept; the font builder applies them in order so a
/// later block overrides an earlier one.
pub fn parse_dots(text: &str) -> Result<Vec<(char, Glyph)>> {
    let mut glyphs = Vec::new();
    let mut current: Option<(char, Vec<Vec<bool>>)> = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }
        if let Some(key) = parse_key(line, line_no)? {
            if let Some((ch, rows)) = current.take() {
                glyphs.push((ch, Glyph::new(rows)));
            }
            current = Some((key, Vec::new()));
            continue;
        }
        let Some((_, rows)) = current.as_mut() else {
            return Err(FontError::Parse(format!(
                "line {line_no}: glyph row before the first key"
            )));
        };
        let row = parse_row(line).map_err(|e| match e {
            FontError::Parse(msg) => FontError::Parse(format!("line {line_no}: {msg}")),
            other => other,
        })?;
        rows.push(row);
    }
    if let Some((ch, rows)) = current {
        glyphs.push((ch, Glyph::new(rows)));
    }
    Ok(glyphs)
}

/// Returns the key for a key line, `None` for a raster row.
fn parse_key(line: &str, line_no: usize) -> Result<Option<char>> {
    let mut chars = line.chars();
    let first = chars.next();
    if let (Some(c), None) = (first, chars.next()) {
        return Ok(Some(c));
    }
    let Some(escape) = line.strip_prefix('\\') else {
        return Ok(None);
    };
    let bad = || FontError::Parse(format!("line {line_no}: invalid key escape {line:?}"));
    let code = if escape == "\\" {
        return Ok(Some('\\'));
    } else if let Some(hex) = escape.strip_prefix('x') {
        if hex.len() != 2 {
            return Err(bad());
        }
        u32::from_str_radix(hex, 16).map_err(|_| bad())?
    } else if let Some(hex) = escape
        .strip_prefix("u{")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        u32::from_str_radix(hex, 16).map_err(|_| bad())?
    } else {
        return Err(bad());
    };
    char::from_u32(code).map(Some).ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_in_source_order() {
        let table = "a\n*.\n.*\n\nb\n**\n..\n";
        let glyphs = parse_dots(table).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].0, 'a');
        assert_eq!(glyphs[0].1.rows(), &[vec![true, false], vec![false, true]]);
        assert_eq!(glyphs[1].0, 'b');
    }

    #[test]
    fn escaped_keys() {
        let table = "\\x20\n..\n\\u{7f}\n**\n\\\\\n*.\n";
        let keys: Vec<char> = parse_dots(table).unwrap().into_iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec![' ', '\u{7f}', '\\']);
    }

    #[test]
    fn non_ascii_key() {
        let glyphs = parse_dots("ä\n*.*\n").unwrap();
        assert_eq!(glyphs[0].0, 'ä');
    }

    #[test]
    fn duplicates_are_kept() {
        let glyphs = parse_dots("a\n*.\na\n.*\n").unwrap();
        assert_eq!(glyphs.len(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let glyphs = parse_dots("a\r\n*.\r\n.*\r\n").unwrap();
        assert_eq!(glyphs[0].1.height(), 2);
        assert_eq!(glyphs[0].1.width(), 2);
    }

    #[test]
    fn row_before_key_is_an_error() {
        let err = parse_dots("**\na\n..\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn bad_marker_reports_line() {
        let err = parse_dots("a\n**\n*o\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn bad_escape_is_an_error() {
        assert!(matches!(parse_dots("\\q1\n**\n"), Err(FontError::Parse(_))));
        assert!(matches!(parse_dots("\\xZZ\n**\n"), Err(FontError::Parse(_))));
        assert!(matches!(parse_dots("\\u{d800}\n**\n"), Err(FontError::Parse(_))));
    }
}
