//! Error types for token construction
//!
//! All failures surface synchronously at construction time: a token either
//! exists with its invariants intact or was never created. There is no
//! recovery or partial-result path.

use std::fmt;

/// Result alias for token construction.
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors that can occur while constructing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Span offsets that do not address a valid substring of the input:
    /// reversed, past the end of the buffer, or off a character boundary.
    InvalidSpan {
        begin: usize,
        end: usize,
        input_len: usize,
    },
    /// A delimited construct whose raw content is empty, leaving no first or
    /// last character to inspect for trim markers.
    EmptyContent { begin: usize, end: usize },
    /// A tag payload that does not begin with a tag name.
    IllegalTagSyntax { content: String },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::InvalidSpan {
                begin,
                end,
                input_len,
            } => write!(
                f,
                "invalid token span {}..{} over input of length {}",
                begin, end, input_len
            ),
            TokenError::EmptyContent { begin, end } => {
                write!(f, "empty content for delimited token at {}..{}", begin, end)
            }
            TokenError::IllegalTagSyntax { content } => {
                write!(f, "illegal tag syntax: \"{}\"", content)
            }
        }
    }
}

impl std::error::Error for TokenError {}

impl From<TokenError> for String {
    fn from(err: TokenError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let span = TokenError::InvalidSpan {
            begin: 4,
            end: 2,
            input_len: 10,
        };
        assert_eq!(
            span.to_string(),
            "invalid token span 4..2 over input of length 10"
        );

        let empty = TokenError::EmptyContent { begin: 0, end: 4 };
        assert_eq!(
            empty.to_string(),
            "empty content for delimited token at 0..4"
        );

        let tag = TokenError::IllegalTagSyntax {
            content: "123".to_string(),
        };
        assert_eq!(tag.to_string(), "illegal tag syntax: \"123\"");
    }

    #[test]
    fn test_error_converts_to_string() {
        let message: String = TokenError::EmptyContent { begin: 1, end: 2 }.into();
        assert!(message.contains("empty content"));
    }
}
