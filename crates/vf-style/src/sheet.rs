// ABOUTME: In-memory stylesheet with ordered rules.
// ABOUTME: Lookup returns the first rule declaring the requested property.

use crate::{Property, Selector, StyleProvider};

#[derive(Debug, Clone)]
struct Rule {
    selector: Selector,
    property: Property,
    value: String,
}

/// An ordered list of dimension declarations
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a single property for a selector (shorthand form, e.g. "#sidebar")
    pub fn declare(&mut self, selector: &str, property: Property, value: impl Into<String>) {
        self.rules.push(Rule {
            selector: Selector::parse(selector),
            property,
            value: value.into(),
        });
    }

    /// Declare both dimensions for a selector
    pub fn declare_size(
        &mut self,
        selector: &str,
        width: impl Into<String>,
        height: impl Into<String>,
    ) {
        self.declare(selector, Property::Width, width);
        self.declare(selector, Property::Height, height);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl StyleProvider for StyleSheet {
    fn lookup(&self, selector: &Selector, property: Property) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.selector == *selector && rule.property == property)
            .map(|rule| rule.value.as_str())
    }
}
