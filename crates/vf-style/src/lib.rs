// ABOUTME: Style rule lookup for the layout engine.
// ABOUTME: Defines selectors, the provider contract, and an in-memory stylesheet.

mod selector;
mod sheet;

pub use selector::{Property, Selector};
pub use sheet::StyleSheet;

/// Resolves a selector to a declared dimension value.
///
/// Returns the raw declared value (the engine requires percentages) or `None`
/// when no rule declares that property for the selector.
pub trait StyleProvider {
    fn lookup(&self, selector: &Selector, property: Property) -> Option<&str>;
}
