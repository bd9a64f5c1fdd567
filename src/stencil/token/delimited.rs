//! Delimiter-bounded tokens with whitespace control
//!
//!     Output and tag constructs are delimited: the scanner hands over the
//!     raw text between the delimiter glyphs, which may itself start or end
//!     with a `-` marker requesting whitespace suppression on that side.
//!     Construction strips the markers and surrounding blanks once and
//!     stores the remaining payload, ready for expression or tag parsing.
//!
//!     The trim flags are recorded exactly as the caller supplied them and
//!     are not re-derived from the markers found in the raw content. The
//!     scanner decides the flags from the delimiter glyphs it matched;
//!     reconciling the two is its call, not ours.

use serde::{Deserialize, Serialize};

use super::core::{kind, SourceToken, Token};
use super::error::{TokenError, TokenResult};
use crate::stencil::options::TemplateOptions;

/// The character that requests whitespace suppression next to a delimiter.
pub const TRIM_MARKER: char = '-';

/// A token for a delimiter-bounded construct.
///
/// Carries the positional token for the whole construct (delimiters
/// included), the trimmed inner payload, and the whitespace-control flags
/// decided by the scanner. Immutable once built, like [`Token`] itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelimitedToken<'s> {
    #[serde(borrow)]
    token: Token<'s>,
    content: String,
    trim_left: bool,
    trim_right: bool,
}

impl<'s> DelimitedToken<'s> {
    /// Build a delimited token from the raw text between the delimiters.
    ///
    /// `content` is the text lexically inside the delimiter glyphs. A
    /// leading or trailing [`TRIM_MARKER`] is dropped from it, the remainder
    /// is whitespace-trimmed, and the result is stored as the payload.
    /// Deriving the payload is deterministic: identical raw content always
    /// stores identical payloads.
    ///
    /// Fails with [`TokenError::EmptyContent`] when `content` is empty,
    /// since marker detection needs a first and a last character to inspect,
    /// and with [`TokenError::InvalidSpan`] on a bad span.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: impl Into<String>,
        content: &str,
        input: &'s str,
        begin: usize,
        end: usize,
        trim_left: bool,
        trim_right: bool,
        file: Option<String>,
    ) -> TokenResult<Self> {
        let token = Token::new(kind, input, begin, end, file)?;
        if content.is_empty() {
            return Err(TokenError::EmptyContent { begin, end });
        }
        Ok(Self {
            token,
            content: strip_trim_markers(content).trim().to_string(),
            trim_left,
            trim_right,
        })
    }

    /// Build an output token spanning `input[begin..end]`.
    ///
    /// The raw content is the text between the configured output delimiters,
    /// and the trim flags are seeded from the output trim defaults. Mirrors
    /// what the scanner does when it matches an output construct.
    pub fn output(
        input: &'s str,
        begin: usize,
        end: usize,
        options: &TemplateOptions,
        file: Option<String>,
    ) -> TokenResult<Self> {
        let raw = inner_slice(
            input,
            begin,
            end,
            &options.output_delimiter_left,
            &options.output_delimiter_right,
        )?;
        Self::new(
            kind::OUTPUT,
            raw,
            input,
            begin,
            end,
            options.trim_output_left,
            options.trim_output_right,
            file,
        )
    }

    /// The trimmed inner payload, markers and surrounding blanks removed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether whitespace control applies on the left, as the caller decided.
    pub fn trim_left(&self) -> bool {
        self.trim_left
    }

    /// Whether whitespace control applies on the right, as the caller decided.
    pub fn trim_right(&self) -> bool {
        self.trim_right
    }
}

impl<'s> SourceToken for DelimitedToken<'s> {
    fn as_token(&self) -> &Token<'_> {
        &self.token
    }
}

/// Last character of a string slice, if any.
fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Drop a leading and/or trailing trim marker from the raw content.
///
/// A lone `-` counts as both a leading and a trailing marker, which leaves
/// an empty payload.
fn strip_trim_markers(content: &str) -> &str {
    let start = if content.starts_with(TRIM_MARKER) { 1 } else { 0 };
    let end = if last_char(content) == Some(TRIM_MARKER) {
        content.len() - 1
    } else {
        content.len()
    };

    if start >= end {
        ""
    } else {
        &content[start..end]
    }
}

/// Slice the text between a construct's delimiters out of the source.
pub(crate) fn inner_slice<'s>(
    input: &'s str,
    begin: usize,
    end: usize,
    delimiter_left: &str,
    delimiter_right: &str,
) -> TokenResult<&'s str> {
    let invalid = || TokenError::InvalidSpan {
        begin,
        end,
        input_len: input.len(),
    };

    let inner_begin = begin + delimiter_left.len();
    let inner_end = end.checked_sub(delimiter_right.len()).ok_or_else(invalid)?;

    if inner_begin > inner_end
        || inner_end > input.len()
        || !input.is_char_boundary(inner_begin)
        || !input.is_char_boundary(inner_end)
    {
        return Err(invalid());
    }

    Ok(&input[inner_begin..inner_end])
}
