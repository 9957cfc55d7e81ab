// ABOUTME: In-memory element tree implementing the box-model contract.
// ABOUTME: Parses layout markup fragments and stores computed pixel sizes.

mod document;
mod parse;

pub use document::{Document, Element, ElementId};
pub use parse::MarkupError;
