//! Positional tokens over caller-owned source text
//!
//!     A token is a half-open byte span `[begin, end)` into the source buffer
//!     it was scanned from, plus a kind tag naming its lexical category. The
//!     buffer is borrowed, never copied: the scanner that constructs tokens
//!     and the parser that consumes them read the same source string, and
//!     location information stays byte-accurate for diagnostics and tooling.
//!
//!     Kinds are plain strings. The scanner owns the vocabulary; this module
//!     only ships constants for the categories every stencil pipeline uses
//!     (text, output, tag).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{TokenError, TokenResult};

/// Kind tags for the common token categories.
///
/// The vocabulary is open: any string is a valid kind. These constants cover
/// the top-level constructs of the stock stencil dialect.
pub mod kind {
    /// Literal template text between constructs.
    pub const TEXT: &str = "text";
    /// An output construct (`{{ ... }}` with stock delimiters).
    pub const OUTPUT: &str = "output";
    /// A tag construct (`<!-- ... -->` with stock delimiters).
    pub const TAG: &str = "tag";
}

/// A row/column position in source text, both 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A lexical token: a kind tag plus a span into the source buffer.
///
/// Tokens never own or mutate the source. The borrow ties every token to its
/// buffer, so the buffer-outlives-tokens ownership policy is checked by the
/// compiler rather than by convention. Construction validates the span; a
/// `Token` that exists always addresses a real substring of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token<'s> {
    kind: String,
    #[serde(borrow)]
    input: &'s str,
    begin: usize,
    end: usize,
    file: Option<String>,
}

impl<'s> Token<'s> {
    /// Create a token over `input[begin..end]`.
    ///
    /// The span must satisfy `begin <= end <= input.len()` with both offsets
    /// on character boundaries; anything else fails with
    /// [`TokenError::InvalidSpan`] instead of producing a garbage substring.
    pub fn new(
        kind: impl Into<String>,
        input: &'s str,
        begin: usize,
        end: usize,
        file: Option<String>,
    ) -> TokenResult<Self> {
        check_span(input, begin, end)?;
        Ok(Self {
            kind: kind.into(),
            input,
            begin,
            end,
            file,
        })
    }

    /// The text this token covers, exactly `input[begin..end]`.
    ///
    /// The result's length always equals [`len`](Self::len).
    pub fn text(&self) -> &'s str {
        &self.input[self.begin..self.end]
    }

    /// Row and column of the token start, both 1-indexed.
    ///
    /// Recomputed on every call by walking the buffer prefix character by
    /// character; O(begin), nothing is cached. Callers that convert many
    /// offsets should build their own line index instead.
    pub fn position(&self) -> Position {
        let mut row = 1;
        let mut col = 1;
        for ch in self.input[..self.begin].chars() {
            if ch == '\n' {
                row += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        Position::new(row, col)
    }

    /// Span length in bytes, `end - begin`.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the span is zero-length.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The lexical category tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The full source buffer this token was scanned from.
    pub fn input(&self) -> &'s str {
        self.input
    }

    /// Byte offset where the span starts.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Source file identifier, when the scanner supplied one.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Numbered source excerpt around the token's row.
    ///
    /// Shows two lines of context on either side, with the token's line
    /// marked by `>>`. Used by diagnostics layers to render file:row:col
    /// errors with their surroundings.
    pub fn source_context(&self) -> String {
        let lines: Vec<&str> = self.input.lines().collect();
        let token_line = self.position().row - 1;

        let start_line = token_line.saturating_sub(2);
        let end_line = (token_line + 3).min(lines.len());

        let mut context = String::new();

        for line_num in start_line..end_line {
            let marker = if line_num == token_line { ">>" } else { "  " };
            let display_line_num = line_num + 1; // 1-indexed for display

            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker, display_line_num, lines[line_num]
            ));
        }

        context
    }
}

/// Capability set shared by every token specialization.
///
/// Consumers that only need span access, such as the parser and diagnostics
/// layers, can take any token type through this trait instead of naming the
/// concrete ones.
pub trait SourceToken {
    /// The underlying positional token.
    fn as_token(&self) -> &Token<'_>;

    /// The text the token covers.
    fn text(&self) -> &str {
        self.as_token().text()
    }

    /// Row and column of the token start, both 1-indexed.
    fn position(&self) -> Position {
        self.as_token().position()
    }

    /// Span length in bytes.
    fn len(&self) -> usize {
        self.as_token().len()
    }

    /// Whether the span is zero-length.
    fn is_empty(&self) -> bool {
        self.as_token().is_empty()
    }

    /// The lexical category tag.
    fn kind(&self) -> &str {
        self.as_token().kind()
    }

    /// Source file identifier, when present.
    fn file(&self) -> Option<&str> {
        self.as_token().file()
    }
}

impl<'s> SourceToken for Token<'s> {
    fn as_token(&self) -> &Token<'_> {
        self
    }
}

fn check_span(input: &str, begin: usize, end: usize) -> TokenResult<()> {
    if begin > end
        || end > input.len()
        || !input.is_char_boundary(begin)
        || !input.is_char_boundary(end)
    {
        return Err(TokenError::InvalidSpan {
            begin,
            end,
            input_len: input.len(),
        });
    }
    Ok(())
}
