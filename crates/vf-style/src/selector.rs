// ABOUTME: Selector and property types for style lookup.
// ABOUTME: Follows the #id / .class / tag shorthand conventions.

use std::fmt;

/// A style rule selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn id(name: impl Into<String>) -> Self {
        Selector::Id(name.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Selector::Class(name.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Selector::Tag(name.into())
    }

    /// Parse the `#id` / `.class` / `tag` shorthand
    pub fn parse(text: &str) -> Selector {
        let text = text.trim();
        if let Some(id) = text.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else if let Some(class) = text.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else {
            Selector::Tag(text.to_string())
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(name) => write!(f, "#{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Tag(name) => write!(f, "{}", name),
        }
    }
}

/// The two dimension properties the engine consults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Width,
    Height,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shorthand() {
        assert_eq!(Selector::parse("#sidebar"), Selector::id("sidebar"));
        assert_eq!(Selector::parse(".panel"), Selector::class("panel"));
        assert_eq!(Selector::parse("div"), Selector::tag("div"));
    }

    #[test]
    fn display_matches_shorthand() {
        assert_eq!(Selector::id("sidebar").to_string(), "#sidebar");
        assert_eq!(Selector::class("panel").to_string(), ".panel");
        assert_eq!(Selector::tag("div").to_string(), "div");
    }
}
