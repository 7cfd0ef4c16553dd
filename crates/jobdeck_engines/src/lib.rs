#![forbid(unsafe_code)]

pub mod escape;
pub mod listing;

pub use escape::{escape_display, escape_markup, escape_markup_str};
pub use listing::{
    filter_jobs, wishlist_label, EmptyNotice, JobCard, Listing, ListingConfig, ListingRenderer,
    TypeFacet,
};
