// ABOUTME: Page orchestration for viewfit.
// ABOUTME: Runs select/install/distribute passes in response to viewport changes.

mod page;

pub use page::{Page, PageError};
