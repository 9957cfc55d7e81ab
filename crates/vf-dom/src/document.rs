// ABOUTME: Arena-based element tree with a fixed body root.
// ABOUTME: Implements the BoxTree contract consumed by the space distributor.

use vf_core::{Display, Size, Viewport};
use vf_layout::BoxTree;

use crate::parse::{self, MarkupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// One element of the document tree
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub display: Display,
    /// Immediate text content, kept for hosts that render labels
    pub text: String,
    pub border_box: bool,
    pub top_aligned: bool,
    pub computed: Option<Size>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        let display = Display::default_for_tag(&tag);
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            display,
            text: String::new(),
            border_box: false,
            top_aligned: false,
            computed: None,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    children: Vec<ElementId>,
}

/// Document tree owned by the orchestrator for the lifetime of a page.
///
/// The root is a `body` element that survives `install`; installed markup
/// becomes the root's children.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.nodes[id.0].element
    }

    pub fn child_ids(&self, id: ElementId) -> &[ElementId] {
        &self.nodes[id.0].children
    }

    /// Number of elements including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the root's content with the parsed markup fragment
    pub fn install(&mut self, markup: &str) -> Result<(), MarkupError> {
        self.nodes.truncate(1);
        self.nodes[0].children.clear();
        self.nodes[0].element.text.clear();
        let root = self.root();
        parse::parse_fragment(self, root, markup)
    }

    /// Pin the root box to the viewport: exact pixel size, border-box, and no
    /// margin/border/padding contribution
    pub fn prepare_root(&mut self, viewport: Viewport) {
        let root = &mut self.nodes[0].element;
        root.border_box = true;
        root.computed = Some(Size::new(viewport.width, viewport.height));
    }

    pub(crate) fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            element,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn append_text(&mut self, id: ElementId, text: &str) {
        self.nodes[id.0].element.text.push_str(text);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxTree for Document {
    type NodeId = ElementId;

    fn root(&self) -> ElementId {
        Document::root(self)
    }

    fn children(&self, node: ElementId) -> Vec<ElementId> {
        self.nodes[node.0].children.clone()
    }

    fn tag(&self, node: ElementId) -> &str {
        &self.nodes[node.0].element.tag
    }

    fn element_id(&self, node: ElementId) -> Option<&str> {
        self.nodes[node.0].element.id.as_deref()
    }

    fn classes(&self, node: ElementId) -> &[String] {
        &self.nodes[node.0].element.classes
    }

    fn display(&self, node: ElementId) -> Display {
        self.nodes[node.0].element.display.clone()
    }

    fn set_border_box(&mut self, node: ElementId) {
        self.nodes[node.0].element.border_box = true;
    }

    fn set_top_aligned(&mut self, node: ElementId) {
        self.nodes[node.0].element.top_aligned = true;
    }

    fn set_computed_size(&mut self, node: ElementId, width: f32, height: f32) {
        self.nodes[node.0].element.computed = Some(Size::new(width, height));
    }
}
