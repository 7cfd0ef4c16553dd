#![forbid(unsafe_code)]

pub mod apply;
pub mod listing_page;
pub mod post_job;
pub mod prefs;

/// Explicit navigation event returned by a controller action, in place of
/// redirect-driven page flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    ToListing,
    ToApply,
}

pub use apply::{ApplyPage, ApplyPrompt, APPLY_CONFIRMATION};
pub use listing_page::ListingPage;
pub use post_job::PostJobPage;
pub use prefs::{dark_mode_enabled, toggle_dark_mode};
