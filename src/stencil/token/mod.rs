//! Core token types shared between the scanner, the parser, and tooling.

pub mod core;
pub mod delimited;
pub mod error;
pub mod tag;

pub use self::core::{kind, Position, SourceToken, Token};
pub use self::delimited::{DelimitedToken, TRIM_MARKER};
pub use self::error::{TokenError, TokenResult};
pub use self::tag::TagToken;
