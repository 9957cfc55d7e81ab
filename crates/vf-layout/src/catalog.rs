// ABOUTME: Registered layout candidates and viewport-based selection.
// ABOUTME: Replicates the pairwise ratio/area tie-break of the selection algorithm.

use vf_core::Viewport;

use crate::minimize::minimize_markup;

/// Sentinel for a layout that applies at any ratio above all other layouts
pub const MAX_RATIO: f32 = f32::INFINITY;

/// A registered layout candidate
#[derive(Debug, Clone)]
pub struct Layout {
    max_ratio: f32,
    min_pixels: f32,
    markup: String,
}

impl Layout {
    fn new(max_ratio: f32, min_pixels: f32, markup: &str) -> Self {
        Self {
            max_ratio,
            min_pixels,
            markup: minimize_markup(markup),
        }
    }

    /// Inclusive upper bound on the viewport ratio this layout accepts
    pub fn max_ratio(&self) -> f32 {
        self.max_ratio
    }

    /// Inclusive lower bound on the viewport area this layout accepts
    pub fn min_pixels(&self) -> f32 {
        self.min_pixels
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("no layouts registered")]
    NoLayoutsRegistered,

    #[error("no layout matches a {width}x{height} viewport")]
    NoMatchingLayout { width: f32, height: f32 },

    #[error("duplicate layout parameters: max ratio {max_ratio}, min pixels {min_pixels}")]
    DuplicateLayoutParameters { max_ratio: f32, min_pixels: f32 },
}

/// Insertion-ordered collection of layout candidates.
///
/// Owned by the orchestrator; registered once at startup and read on every
/// resize.
#[derive(Debug, Clone, Default)]
pub struct LayoutCatalog {
    layouts: Vec<Layout>,
}

impl LayoutCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layout candidate. The markup is minimized here so layout
    /// definitions may span multiple lines.
    pub fn register(&mut self, max_ratio: f32, min_pixels: f32, markup: &str) {
        self.layouts.push(Layout::new(max_ratio, min_pixels, markup));
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Pick the best registered layout for the viewport.
    ///
    /// Candidates that accept the viewport (max ratio at or above the
    /// viewport ratio, min pixels at or below the viewport area) are reduced
    /// pairwise in registration order: a challenger replaces the survivor
    /// only when its max ratio is strictly closer to the viewport ratio AND
    /// its min pixels is strictly closer to the viewport area. The reduction
    /// is order-sensitive for 3+ overlapping candidates; callers get the
    /// first applicable survivor, not a global optimum. Two passing
    /// candidates with identical parameters make the registered set
    /// ambiguous and fail selection outright.
    pub fn select(&self, viewport: Viewport) -> Result<&str, CatalogError> {
        if self.layouts.is_empty() {
            return Err(CatalogError::NoLayoutsRegistered);
        }
        let ratio = viewport.ratio();
        let pixels = viewport.pixels();

        let mut survivor: Option<&Layout> = None;
        for candidate in &self.layouts {
            if candidate.max_ratio < ratio || candidate.min_pixels > pixels {
                continue;
            }
            let Some(current) = survivor else {
                survivor = Some(candidate);
                continue;
            };
            if current.max_ratio == candidate.max_ratio
                && current.min_pixels == candidate.min_pixels
            {
                return Err(CatalogError::DuplicateLayoutParameters {
                    max_ratio: candidate.max_ratio,
                    min_pixels: candidate.min_pixels,
                });
            }
            if (current.max_ratio - ratio) > (candidate.max_ratio - ratio)
                && (pixels - current.min_pixels) > (pixels - candidate.min_pixels)
            {
                survivor = Some(candidate);
            }
        }

        match survivor {
            Some(layout) => Ok(layout.markup()),
            None => Err(CatalogError::NoMatchingLayout {
                width: viewport.width,
                height: viewport.height,
            }),
        }
    }
}
