//! Delimiter and whitespace-control configuration
//!
//!     The scanner decides where constructs begin and end using the
//!     delimiter glyph pairs configured here, and seeds the trim flags of
//!     the tokens it produces from the trim defaults. This crate stores and
//!     serializes the values; interpreting `greedy` (how far trimming
//!     reaches past a newline) is whitespace-control behavior owned by the
//!     scanner and renderer.

use serde::{Deserialize, Serialize};

/// Lexical options for a stencil template source.
///
/// Defaults mirror the stock stencil dialect: `{{ ... }}` outputs that keep
/// surrounding whitespace, HTML-comment tags that trim it, and greedy
/// whitespace control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TemplateOptions {
    /// Opening glyphs of an output construct.
    pub output_delimiter_left: String,
    /// Closing glyphs of an output construct.
    pub output_delimiter_right: String,
    /// Opening glyphs of a tag construct.
    pub tag_delimiter_left: String,
    /// Closing glyphs of a tag construct.
    pub tag_delimiter_right: String,
    /// Default left trim flag for output tokens.
    pub trim_output_left: bool,
    /// Default right trim flag for output tokens.
    pub trim_output_right: bool,
    /// Default left trim flag for tag tokens.
    pub trim_tag_left: bool,
    /// Default right trim flag for tag tokens.
    pub trim_tag_right: bool,
    /// Whether trimming consumes consecutive blanks across line breaks.
    pub greedy: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            output_delimiter_left: "{{".to_string(),
            output_delimiter_right: "}}".to_string(),
            tag_delimiter_left: "<!--".to_string(),
            tag_delimiter_right: "-->".to_string(),
            trim_output_left: false,
            trim_output_right: false,
            trim_tag_left: true,
            trim_tag_right: true,
            greedy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_dialect_defaults() {
        let options = TemplateOptions::default();

        assert_eq!(options.output_delimiter_left, "{{");
        assert_eq!(options.output_delimiter_right, "}}");
        assert_eq!(options.tag_delimiter_left, "<!--");
        assert_eq!(options.tag_delimiter_right, "-->");
        assert!(!options.trim_output_left);
        assert!(!options.trim_output_right);
        assert!(options.trim_tag_left);
        assert!(options.trim_tag_right);
        assert!(options.greedy);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let options: TemplateOptions = serde_json::from_str(
            r#"{"output-delimiter-left": "[[", "output-delimiter-right": "]]", "greedy": false}"#,
        )
        .unwrap();

        assert_eq!(options.output_delimiter_left, "[[");
        assert_eq!(options.output_delimiter_right, "]]");
        assert!(!options.greedy);
        // untouched keys fall back to the stock dialect
        assert_eq!(options.tag_delimiter_left, "<!--");
        assert!(options.trim_tag_left);
    }
}
