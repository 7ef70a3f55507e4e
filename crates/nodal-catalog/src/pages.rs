//! Lazy pagination over catalog search results.

use nodal_core::SearchWindow;

use crate::{Catalog, CatalogError, SearchHit};

/// Consume-once sequence of search pages.
///
/// Pages are requested only when [`SearchPages::next_page`] is awaited. The
/// sequence ends after an empty page, a page shorter than the page size, or
/// the first error.
pub struct SearchPages<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    window: &'a SearchWindow,
    next_offset: usize,
    exhausted: bool,
}

impl<'a, C: Catalog + ?Sized> SearchPages<'a, C> {
    pub fn new(catalog: &'a C, window: &'a SearchWindow) -> Self {
        Self {
            catalog,
            window,
            next_offset: 1,
            exhausted: false,
        }
    }

    /// Fetch the next page, or `None` once the results are exhausted.
    pub async fn next_page(&mut self) -> Option<Result<Vec<SearchHit>, CatalogError>> {
        if self.exhausted {
            return None;
        }

        let limit = self.catalog.page_size().max(1);
        match self
            .catalog
            .search_page(self.window, self.next_offset, limit)
            .await
        {
            Ok(page) => {
                tracing::debug!(offset = self.next_offset, count = page.len(), "search page");
                if page.len() < limit {
                    self.exhausted = true;
                }
                if page.is_empty() {
                    return None;
                }
                self.next_offset += page.len();
                Some(Ok(page))
            }
            Err(error) => {
                self.exhausted = true;
                Some(Err(error))
            }
        }
    }
}
