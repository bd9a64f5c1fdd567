//! Tag tokens
//!
//!     A tag is a delimited construct whose payload begins with the tag name
//!     (`<!-- include "header.html" -->` with stock delimiters). Construction
//!     splits the payload into the name and the raw argument text; parsing
//!     the arguments is the tag implementation's business, not ours.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::core::{kind, SourceToken, Token};
use super::delimited::{inner_slice, DelimitedToken};
use super::error::{TokenError, TokenResult};
use crate::stencil::options::TemplateOptions;

/// Lazy-compiled regex for the leading identifier of a tag payload
static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// A token for a tag construct.
///
/// Wraps the underlying [`DelimitedToken`] and adds the tag name plus the
/// raw argument text that follows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagToken<'s> {
    #[serde(borrow)]
    token: DelimitedToken<'s>,
    name: String,
    args: String,
}

impl<'s> TagToken<'s> {
    /// Build a tag token spanning `input[begin..end]`.
    ///
    /// The raw content is the text between the configured tag delimiters,
    /// and the trim flags are seeded from the tag trim defaults. Fails with
    /// [`TokenError::IllegalTagSyntax`] when the trimmed payload does not
    /// start with an identifier, which also covers whitespace-only tags.
    pub fn new(
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
            &options.tag_delimiter_left,
            &options.tag_delimiter_right,
        )?;
        let token = DelimitedToken::new(
            kind::TAG,
            raw,
            input,
            begin,
            end,
            options.trim_tag_left,
            options.trim_tag_right,
            file,
        )?;

        let name = match TAG_NAME.find(token.content()) {
            Some(found) => found.as_str().to_string(),
            None => {
                return Err(TokenError::IllegalTagSyntax {
                    content: token.content().to_string(),
                })
            }
        };
        let args = token.content()[name.len()..].trim_start().to_string();

        Ok(Self { token, name, args })
    }

    /// The tag name, the leading identifier of the payload.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything after the tag name, left-trimmed. Empty for bare tags.
    pub fn args(&self) -> &str {
        &self.args
    }

    /// The underlying delimited token, for payload and trim-flag access.
    pub fn delimited(&self) -> &DelimitedToken<'s> {
        &self.token
    }

    /// The trimmed inner payload, name and arguments included.
    pub fn content(&self) -> &str {
        self.token.content()
    }

    /// Whether whitespace control applies on the left.
    pub fn trim_left(&self) -> bool {
        self.token.trim_left()
    }

    /// Whether whitespace control applies on the right.
    pub fn trim_right(&self) -> bool {
        self.token.trim_right()
    }
}

impl<'s> SourceToken for TagToken<'s> {
    fn as_token(&self) -> &Token<'_> {
        self.token.as_token()
    }
}
