// ABOUTME: CSS-style display values reported by the box model.
// ABOUTME: Parsed from a style declaration or defaulted from the tag name.

use std::fmt;

/// Effective display value of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    Block,
    InlineBlock,
    Inline,
    None,
    /// Any display value the layout engine does not handle (flex, grid, ...)
    Other(String),
}

impl Display {
    /// Parse a declared display value
    pub fn parse(value: &str) -> Display {
        match value.trim() {
            "block" => Display::Block,
            "inline-block" => Display::InlineBlock,
            "inline" => Display::Inline,
            "none" => Display::None,
            other => Display::Other(other.to_string()),
        }
    }

    /// Default display for a tag when no declaration overrides it
    pub fn default_for_tag(tag: &str) -> Display {
        match tag {
            "body" | "div" | "p" | "main" | "header" | "footer" | "nav" | "section"
            | "article" | "aside" | "ul" | "ol" | "li" | "h1" | "h2" | "h3" | "h4" | "h5"
            | "h6" => Display::Block,
            "span" | "a" | "em" | "strong" | "label" | "img" | "button" => Display::Inline,
            _ => Display::Block,
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Display::Block => write!(f, "block"),
            Display::InlineBlock => write!(f, "inline-block"),
            Display::Inline => write!(f, "inline"),
            Display::None => write!(f, "none"),
            Display::Other(value) => write!(f, "{}", value),
        }
    }
}
