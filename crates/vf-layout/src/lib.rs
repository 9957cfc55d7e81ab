// ABOUTME: Layout selection and space distribution for viewfit.
// ABOUTME: Implements the catalog, markup minimization, and the recursive distributor.

mod catalog;
mod distribute;
mod minimize;

pub use catalog::{CatalogError, Layout, LayoutCatalog, MAX_RATIO};
pub use distribute::{distribute, AxisMode, BoxTree, DistributeError, SizeHint};
pub use minimize::minimize_markup;
