// ABOUTME: Recursive sibling-space distribution over an element tree.
// ABOUTME: Resolves percentage hints per sibling group and applies pixel sizes top-down.

use std::fmt;

use vf_core::Display;
use vf_style::{Property, Selector, StyleProvider};

/// Box-model collaborator contract.
///
/// The rendering substrate reports tree structure and display values, and
/// accepts the computed pixel sizes. The distributor never reads a size back,
/// so a single top-down pass suffices.
pub trait BoxTree {
    type NodeId: Copy;

    fn root(&self) -> Self::NodeId;
    fn children(&self, node: Self::NodeId) -> Vec<Self::NodeId>;
    fn tag(&self, node: Self::NodeId) -> &str;
    fn element_id(&self, node: Self::NodeId) -> Option<&str>;
    fn classes(&self, node: Self::NodeId) -> &[String];
    fn display(&self, node: Self::NodeId) -> Display;
    /// Force border-box sizing so padding and borders stay inside the computed size
    fn set_border_box(&mut self, node: Self::NodeId);
    /// Force top alignment, required on inline-block siblings for correct spacing
    fn set_top_aligned(&mut self, node: Self::NodeId);
    fn set_computed_size(&mut self, node: Self::NodeId, width: f32, height: f32);
}

/// How a sibling group flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Vertical stacking; widths independent, declared heights share 100%
    Block,
    /// Horizontal flow; heights independent, declared widths share 100%
    Inline,
}

impl fmt::Display for AxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisMode::Block => write!(f, "block"),
            AxisMode::Inline => write!(f, "inline-block"),
        }
    }
}

/// A resolved percentage pair declared for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    pub width_pct: f32,
    pub height_pct: f32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributeError {
    #[error("mix of block and inline-block sibling elements under <{parent}>")]
    MixedAxisModes { parent: String },

    #[error("<{tag}> display '{display}' is neither block nor inline-block")]
    InvalidDisplayMode { tag: String, display: String },

    #[error("{selector} {property} '{value}' is not a percentage")]
    NonPercentageUnit {
        selector: String,
        property: Property,
        value: String,
    },

    #[error("{selector} declares {declared} but not {missing}")]
    IncompleteDimensionDeclaration {
        selector: String,
        declared: Property,
        missing: Property,
    },

    #[error("{mode} siblings declare {total}% of the constrained axis, more than 100%")]
    ConstrainedAxisOverflow { mode: AxisMode, total: f32 },
}

/// Recursively fit `node`'s descendants into the given pixel box.
///
/// Each sibling group must be homogeneous (all block or all inline-block).
/// Declared percentage hints constrain one axis per mode; undeclared siblings
/// split the remainder of that axis evenly and span the other axis fully.
/// Every child's pixel size derives from the parent box passed in, which is
/// final before the recursion descends, so the root's viewport size
/// propagates to every leaf with no overflow.
///
/// Any error aborts the whole pass; partially applied sizes are not rolled
/// back, and the caller discards the pass.
pub fn distribute<T, S>(
    tree: &mut T,
    styles: &S,
    node: T::NodeId,
    width: f32,
    height: f32,
) -> Result<(), DistributeError>
where
    T: BoxTree,
    S: StyleProvider,
{
    let children = tree.children(node);
    if children.is_empty() {
        return Ok(());
    }

    let mut mode = None;
    let mut hints = Vec::with_capacity(children.len());
    for &child in &children {
        tree.set_border_box(child);
        let child_mode = axis_mode(tree, child)?;
        match mode {
            None => mode = Some(child_mode),
            Some(group_mode) if group_mode != child_mode => {
                return Err(DistributeError::MixedAxisModes {
                    parent: tree.tag(node).to_string(),
                });
            }
            Some(_) => {}
        }
        hints.push(resolve_hint(tree, styles, child)?);
    }
    let Some(mode) = mode else {
        return Ok(());
    };

    let mut declared_total = 0.0;
    let mut undeclared = 0usize;
    for hint in &hints {
        match (mode, hint) {
            (AxisMode::Block, Some(hint)) => declared_total += hint.height_pct,
            (AxisMode::Inline, Some(hint)) => declared_total += hint.width_pct,
            (_, None) => undeclared += 1,
        }
    }
    if declared_total > 100.0 {
        return Err(DistributeError::ConstrainedAxisOverflow {
            mode,
            total: declared_total,
        });
    }
    let even_share = if undeclared > 0 {
        (100.0 - declared_total) / undeclared as f32
    } else {
        0.0
    };

    if mode == AxisMode::Inline {
        for &child in &children {
            tree.set_top_aligned(child);
        }
    }

    for (&child, hint) in children.iter().zip(&hints) {
        let (width_pct, height_pct) = match hint {
            Some(hint) => (hint.width_pct, hint.height_pct),
            None => match mode {
                AxisMode::Block => (100.0, even_share),
                AxisMode::Inline => (even_share, 100.0),
            },
        };
        let child_width = width_pct / 100.0 * width;
        let child_height = height_pct / 100.0 * height;
        tree.set_computed_size(child, child_width, child_height);
        distribute(tree, styles, child, child_width, child_height)?;
    }
    Ok(())
}

fn axis_mode<T: BoxTree>(tree: &T, node: T::NodeId) -> Result<AxisMode, DistributeError> {
    match tree.display(node) {
        Display::Block => Ok(AxisMode::Block),
        Display::InlineBlock => Ok(AxisMode::Inline),
        other => Err(DistributeError::InvalidDisplayMode {
            tag: tree.tag(node).to_string(),
            display: other.to_string(),
        }),
    }
}

/// Resolve an element's declared size by selector priority: id, then each
/// class in list order, then tag name. The first selector declaring both
/// dimensions wins; a selector declaring exactly one of the two is an error
/// rather than a fallthrough.
fn resolve_hint<T, S>(
    tree: &T,
    styles: &S,
    node: T::NodeId,
) -> Result<Option<SizeHint>, DistributeError>
where
    T: BoxTree,
    S: StyleProvider,
{
    let mut selectors = Vec::new();
    if let Some(id) = tree.element_id(node) {
        selectors.push(Selector::id(id));
    }
    for class in tree.classes(node) {
        selectors.push(Selector::class(class.clone()));
    }
    selectors.push(Selector::tag(tree.tag(node)));

    for selector in selectors {
        let width = styles.lookup(&selector, Property::Width);
        let height = styles.lookup(&selector, Property::Height);
        match (width, height) {
            (None, None) => continue,
            (Some(_), None) => {
                return Err(DistributeError::IncompleteDimensionDeclaration {
                    selector: selector.to_string(),
                    declared: Property::Width,
                    missing: Property::Height,
                });
            }
            (None, Some(_)) => {
                return Err(DistributeError::IncompleteDimensionDeclaration {
                    selector: selector.to_string(),
                    declared: Property::Height,
                    missing: Property::Width,
                });
            }
            (Some(width), Some(height)) => {
                return Ok(Some(SizeHint {
                    width_pct: parse_percentage(&selector, Property::Width, width)?,
                    height_pct: parse_percentage(&selector, Property::Height, height)?,
                }));
            }
        }
    }
    Ok(None)
}

fn parse_percentage(
    selector: &Selector,
    property: Property,
    value: &str,
) -> Result<f32, DistributeError> {
    value
        .trim()
        .strip_suffix('%')
        .and_then(|number| number.trim().parse::<f32>().ok())
        .ok_or_else(|| DistributeError::NonPercentageUnit {
            selector: selector.to_string(),
            property,
            value: value.to_string(),
        })
}
