// ABOUTME: Markup fragment parsing via quick-xml events.
// ABOUTME: Builds elements from start tags and honors id/class/style attributes.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use vf_core::Display;

use crate::document::{Document, Element, ElementId};

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Markup syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("Bad attribute in markup: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Unclosed <{0}> in markup")]
    Unclosed(String),

    #[error("Unexpected closing </{0}> in markup")]
    UnexpectedClose(String),
}

/// Parse a markup fragment into children of `parent`.
///
/// Layout markup is authored for this engine, so it must be well-formed:
/// every tag closed or self-closing, names balanced. Only the `id`, `class`,
/// and `style` attributes are consulted, and of `style` only the `display`
/// declaration; dimensions always come from the style provider.
pub fn parse_fragment(
    document: &mut Document,
    parent: ElementId,
    markup: &str,
) -> Result<(), MarkupError> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<ElementId> = vec![parent];

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let element = element_from_start(&start)?;
                let top = *stack.last().unwrap_or(&parent);
                let id = document.append(top, element);
                stack.push(id);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                let top = *stack.last().unwrap_or(&parent);
                document.append(top, element);
            }
            Event::End(end) => {
                if stack.len() <= 1 {
                    let name = std::str::from_utf8(end.name().as_ref())?.to_string();
                    return Err(MarkupError::UnexpectedClose(name));
                }
                stack.pop();
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                let top = *stack.last().unwrap_or(&parent);
                document.append_text(top, &text);
            }
            Event::Eof => break,
            // non-element events carry no layout
            _ => {}
        }
    }

    if stack.len() > 1 {
        let top = *stack.last().unwrap_or(&parent);
        return Err(MarkupError::Unclosed(document.element(top).tag.clone()));
    }
    Ok(())
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, MarkupError> {
    let name = start.name();
    let tag = std::str::from_utf8(name.as_ref())?;
    let mut element = Element::new(tag);

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => element.id = Some(value.into_owned()),
            b"class" => {
                element.classes = value.split_whitespace().map(str::to_string).collect();
            }
            b"style" => apply_style(&mut element, &value),
            _ => {}
        }
    }
    Ok(element)
}

fn apply_style(element: &mut Element, style: &str) {
    for declaration in style.split(';') {
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        if name.trim() == "display" {
            element.display = Display::parse(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements() {
        let mut document = Document::new();
        document
            .install("<div id=\"wrap\"><span class=\"a b\">hi</span><p>text</p></div>")
            .unwrap();

        let root = document.root();
        let wrap = document.child_ids(root)[0];
        assert_eq!(document.element(wrap).tag, "div");
        assert_eq!(document.element(wrap).id.as_deref(), Some("wrap"));

        let children = document.child_ids(wrap);
        assert_eq!(children.len(), 2);
        let span = document.element(children[0]);
        assert_eq!(span.tag, "span");
        assert_eq!(span.classes, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(span.text, "hi");
        assert_eq!(document.element(children[1]).text, "text");
    }

    #[test]
    fn display_defaults_by_tag_and_style_overrides() {
        let mut document = Document::new();
        document
            .install("<div></div><span style=\"display: inline-block\"></span>")
            .unwrap();

        let root = document.root();
        let children: Vec<_> = document.child_ids(root).to_vec();
        assert_eq!(document.element(children[0]).display, Display::Block);
        assert_eq!(document.element(children[1]).display, Display::InlineBlock);
    }

    #[test]
    fn self_closing_tags_are_leaves() {
        let mut document = Document::new();
        document.install("<div><widget class=\"c\"/></div>").unwrap();

        let root = document.root();
        let div = document.child_ids(root)[0];
        let widget = document.child_ids(div)[0];
        assert_eq!(document.element(widget).tag, "widget");
        assert!(document.child_ids(widget).is_empty());
    }

    #[test]
    fn unclosed_tag_is_an_error() {
        let mut document = Document::new();
        let result = document.install("<div><span></span>");
        assert!(matches!(result, Err(MarkupError::Unclosed(tag)) if tag == "div"));
    }

    #[test]
    fn mismatched_close_is_an_error() {
        let mut document = Document::new();
        assert!(document.install("<div></span>").is_err());
    }

    #[test]
    fn tag_names_are_lowercased() {
        let mut document = Document::new();
        document.install("<DIV></DIV>").unwrap();

        let root = document.root();
        let div = document.child_ids(root)[0];
        assert_eq!(document.element(div).tag, "div");
    }
}
