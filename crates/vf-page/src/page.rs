// ABOUTME: The orchestrator owning catalog, styles, and document.
// ABOUTME: Each resize event triggers one complete select/install/distribute pass.

use vf_core::{Config, Viewport};
use vf_dom::{Document, MarkupError};
use vf_layout::{distribute, CatalogError, DistributeError, LayoutCatalog};
use vf_style::StyleProvider;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("layout selection failed: {0}")]
    Selection(#[from] CatalogError),

    #[error("markup install failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("space distribution failed: {0}")]
    Distribution(#[from] DistributeError),
}

/// Drives the layout engine.
///
/// Owns the layout catalog, the style provider, and the document for the
/// lifetime of the page. The host forwards every viewport change (and one
/// initial call at startup) to `handle_resize`; each call runs one complete
/// synchronous pass, so passes never interleave.
pub struct Page<S> {
    catalog: LayoutCatalog,
    styles: S,
    document: Document,
    config: Config,
    last_viewport: Option<Viewport>,
}

impl<S: StyleProvider> Page<S> {
    pub fn new(catalog: LayoutCatalog, styles: S) -> Self {
        Self::with_config(catalog, styles, Config::default())
    }

    pub fn with_config(catalog: LayoutCatalog, styles: S, config: Config) -> Self {
        Self {
            catalog,
            styles,
            document: Document::new(),
            config,
            last_viewport: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one complete layout pass for the viewport.
    ///
    /// Returns `Ok(false)` when the pass was coalesced away: the viewport
    /// matches the last completed pass and coalescing is enabled, so an
    /// identical pass would recompute identical sizes. Errors abort the pass
    /// and propagate to the host; they indicate a defect in the registered
    /// layouts or styles rather than a transient condition, so there is no
    /// retry.
    pub fn handle_resize(&mut self, viewport: Viewport) -> Result<bool, PageError> {
        if self.config.coalesce_resizes && self.last_viewport == Some(viewport) {
            tracing::debug!(
                "viewport unchanged at {}x{}, pass coalesced",
                viewport.width,
                viewport.height
            );
            return Ok(false);
        }

        self.document.prepare_root(viewport);
        let markup = self.catalog.select(viewport)?;
        self.document.install(markup)?;
        let root = self.document.root();
        distribute(
            &mut self.document,
            &self.styles,
            root,
            viewport.width,
            viewport.height,
        )?;

        self.last_viewport = Some(viewport);
        tracing::info!(
            "laid out {} elements for {}x{}",
            self.document.len(),
            viewport.width,
            viewport.height
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::Size;
    use vf_layout::MAX_RATIO;
    use vf_style::StyleSheet;

    fn assert_size(actual: Option<Size>, width: f32, height: f32) {
        let size = actual.expect("element was not sized");
        assert!(
            (size.width - width).abs() < 0.01 && (size.height - height).abs() < 0.01,
            "expected {}x{}, got {}x{}",
            width,
            height,
            size.width,
            size.height
        );
    }

    fn catalog_with_block_layout() -> LayoutCatalog {
        let mut catalog = LayoutCatalog::new();
        catalog.register(
            MAX_RATIO,
            0.0,
            "<div id=\"banner\"></div>
             <div class=\"content\"></div>",
        );
        catalog
    }

    #[test]
    fn resize_lays_out_the_selected_markup() {
        let mut styles = StyleSheet::new();
        styles.declare_size("#banner", "100%", "30%");

        let mut page = Page::new(catalog_with_block_layout(), styles);
        assert!(page.handle_resize(Viewport::new(800.0, 600.0)).unwrap());

        let document = page.document();
        let root = document.root();
        assert_eq!(
            document.element(root).computed,
            Some(Size::new(800.0, 600.0))
        );

        let children = document.child_ids(root);
        assert_size(document.element(children[0]).computed, 800.0, 180.0);
        assert_size(document.element(children[1]).computed, 800.0, 420.0);
    }

    #[test]
    fn viewport_ratio_switches_layouts() {
        let mut catalog = LayoutCatalog::new();
        catalog.register(1.0, 0.0, "<div class=\"tall\"></div>");
        catalog.register(MAX_RATIO, 0.0, "<div class=\"wide\"></div>");

        let mut page = Page::new(catalog, StyleSheet::new());

        page.handle_resize(Viewport::new(400.0, 800.0)).unwrap();
        let document = page.document();
        let child = document.child_ids(document.root())[0];
        assert_eq!(document.element(child).classes, vec!["tall".to_string()]);

        page.handle_resize(Viewport::new(1280.0, 720.0)).unwrap();
        let document = page.document();
        let child = document.child_ids(document.root())[0];
        assert_eq!(document.element(child).classes, vec!["wide".to_string()]);
    }

    #[test]
    fn unchanged_viewport_is_coalesced() {
        let mut page = Page::new(catalog_with_block_layout(), StyleSheet::new());
        let viewport = Viewport::new(1024.0, 768.0);

        assert!(page.handle_resize(viewport).unwrap());
        assert!(!page.handle_resize(viewport).unwrap());
        assert!(page.handle_resize(Viewport::new(800.0, 600.0)).unwrap());
    }

    #[test]
    fn coalescing_can_be_disabled() {
        let config = Config {
            coalesce_resizes: false,
            ..Config::default()
        };
        let mut page = Page::with_config(catalog_with_block_layout(), StyleSheet::new(), config);
        let viewport = Viewport::new(1024.0, 768.0);

        assert!(page.handle_resize(viewport).unwrap());
        assert!(page.handle_resize(viewport).unwrap());
    }

    #[test]
    fn empty_catalog_aborts_the_pass() {
        let mut page = Page::new(LayoutCatalog::new(), StyleSheet::new());
        let result = page.handle_resize(Viewport::new(800.0, 600.0));
        assert!(matches!(
            result,
            Err(PageError::Selection(CatalogError::NoLayoutsRegistered))
        ));
    }

    #[test]
    fn overflowing_stylesheet_aborts_the_pass() {
        let mut styles = StyleSheet::new();
        styles.declare_size("div", "100%", "60%");

        let mut catalog = LayoutCatalog::new();
        catalog.register(MAX_RATIO, 0.0, "<div></div><div></div>");

        let mut page = Page::new(catalog, styles);
        let result = page.handle_resize(Viewport::new(800.0, 600.0));
        assert!(matches!(
            result,
            Err(PageError::Distribution(
                DistributeError::ConstrainedAxisOverflow { .. }
            ))
        ));
    }

    #[test]
    fn malformed_markup_aborts_the_pass() {
        let mut catalog = LayoutCatalog::new();
        catalog.register(MAX_RATIO, 0.0, "<div><span></div>");

        let mut page = Page::new(catalog, StyleSheet::new());
        let result = page.handle_resize(Viewport::new(800.0, 600.0));
        assert!(matches!(result, Err(PageError::Markup(_))));
    }

    #[test]
    fn startup_uses_the_configured_viewport() {
        let config = Config::default();
        let viewport = config.initial_viewport();
        let mut page = Page::with_config(catalog_with_block_layout(), StyleSheet::new(), config);

        page.handle_resize(viewport).unwrap();
        let document = page.document();
        assert_eq!(
            document.element(document.root()).computed,
            Some(Size::new(1200.0, 800.0))
        );
    }
}
