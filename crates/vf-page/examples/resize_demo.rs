// ABOUTME: Demo driving the layout engine through a handful of viewports.
// ABOUTME: Prints each computed element tree to stdout.

use anyhow::Result;

use vf_core::{Config, Viewport};
use vf_dom::{Document, ElementId};
use vf_layout::{LayoutCatalog, MAX_RATIO};
use vf_page::Page;
use vf_style::StyleSheet;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_or_default();

    let mut catalog = LayoutCatalog::new();
    // portrait: banner stacked above the content pane
    catalog.register(
        1.0,
        0.0,
        "<div id=\"banner\">banner</div>
         <div class=\"content\">reading pane</div>",
    );
    // landscape: sidebar beside the content pane
    catalog.register(
        MAX_RATIO,
        0.0,
        "<div style=\"display: inline-block\" id=\"sidebar\">nav</div>
         <div style=\"display: inline-block\" class=\"content\">main pane</div>",
    );

    let mut styles = StyleSheet::new();
    styles.declare_size("#banner", "100%", "20%");
    styles.declare_size("#sidebar", "25%", "100%");

    let mut page = Page::with_config(catalog, styles, config.clone());

    let viewports = [
        config.initial_viewport(),
        Viewport::new(1280.0, 720.0),
        Viewport::new(480.0, 800.0),
        Viewport::new(480.0, 800.0), // coalesced away unless disabled in config
    ];
    for viewport in viewports {
        let ran = page.handle_resize(viewport)?;
        println!("-- {}x{} (pass ran: {})", viewport.width, viewport.height, ran);
        if ran {
            print_tree(page.document(), page.document().root(), 0);
        }
    }
    Ok(())
}

fn print_tree(document: &Document, node: ElementId, depth: usize) {
    let element = document.element(node);
    let size = element
        .computed
        .map(|s| format!("{:.0}x{:.0}", s.width, s.height))
        .unwrap_or_else(|| "unsized".to_string());
    println!("{}<{}> {}", "  ".repeat(depth), element.tag, size);
    for &child in document.child_ids(node) {
        print_tree(document, child, depth + 1);
    }
}
