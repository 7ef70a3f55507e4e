//! # nodal-catalog
//!
//! Earthquake catalog access for nodal.
//!
//! - [`Catalog`]: the two calls the harvest needs (a paged event search and a
//!   per-event detail fetch)
//! - [`CatalogClient`]: the HTTP implementation against the USGS ComCat FDSN
//!   event service (GeoJSON)
//! - [`SearchPages`]: lazy, consume-once pagination over search results
//! - [`harvest`]: search, fetch each event's detail, extract nodal planes

mod client;
mod error;
mod geojson;
mod harvest;
mod http;
mod pages;

pub use client::{CatalogClient, ClientOptions};
pub use error::{CatalogError, MalformedEvent};
pub use geojson::{EventDetail, ProductDocument};
pub use harvest::{harvest, harvest_event};
pub use pages::SearchPages;

use async_trait::async_trait;
use nodal_core::{EventSummary, SearchWindow};

/// One entry of a search page: an event summary, or the reason it could not
/// be read.
pub type SearchHit = Result<EventSummary, MalformedEvent>;

/// Largest page the FDSN event service will return.
pub const MAX_PAGE_SIZE: usize = 20_000;

/// Remote earthquake catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Events requested per search page.
    fn page_size(&self) -> usize {
        MAX_PAGE_SIZE
    }

    /// Fetch one page of events matching `window`.
    ///
    /// `offset` is 1-based, as in the FDSN `offset` parameter. A feature that
    /// cannot be read fails only its own entry.
    async fn search_page(
        &self,
        window: &SearchWindow,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<SearchHit>, CatalogError>;

    /// Fetch the full detail document of one event.
    async fn event_detail(&self, event_id: &str) -> Result<EventDetail, CatalogError>;
}

/// Start a lazy search over every page matching `window`.
pub fn search<'a, C: Catalog + ?Sized>(catalog: &'a C, window: &'a SearchWindow) -> SearchPages<'a, C> {
    SearchPages::new(catalog, window)
}
