use thiserror::Error;

use crate::font::GlyphIssue;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("malformed glyph {0}")]
    MalformedGlyph(GlyphIssue),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, FontError>;
