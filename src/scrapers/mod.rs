//! Site scraping: URL discovery and per-listing field extraction.
//!
//! The scraper follows a two-phase pattern:
//!
//! 1. **Indexing**: walk the paginated search results and collect every
//!    item's detail-page URL ([`olx::index_listings`])
//! 2. **Fetching**: download each detail page and extract a structured
//!    record ([`olx::scrape_listing`])
//!
//! Field extraction is deliberately split from selector knowledge: the
//! [`selectors`] module owns the CSS class tables (the only coupling to the
//! site's markup version), while [`olx`] owns how matched nodes combine into
//! a [`crate::models::ListingRecord`].

pub mod olx;
pub mod selectors;
