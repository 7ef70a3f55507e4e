//! Per-session result store.
//!
//! A [`Session`] is created when the user starts working with one product
//! type and dropped when they are done. It holds the last search's rows and
//! the export file name the user is editing. Nothing is shared between
//! sessions.

use crate::event::{EventRecord, ResultSet};
use crate::product::ProductType;

/// Whether a search has completed in this session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    /// No search has run yet.
    #[default]
    Absent,
    /// The rows of the most recent search (possibly empty).
    Present(ResultSet),
}

#[derive(Debug, Clone)]
pub struct Session {
    product_type: ProductType,
    results: ResultState,
    file_name: String,
}

impl Session {
    /// Start a session using the product type's default export name.
    #[must_use]
    pub fn new(product_type: ProductType) -> Self {
        Self::with_file_name(product_type, product_type.default_file_name())
    }

    #[must_use]
    pub fn with_file_name(product_type: ProductType, file_name: impl Into<String>) -> Self {
        Self {
            product_type,
            results: ResultState::Absent,
            file_name: file_name.into(),
        }
    }

    #[must_use]
    pub const fn product_type(&self) -> ProductType {
        self.product_type
    }

    #[must_use]
    pub const fn results(&self) -> &ResultState {
        &self.results
    }

    /// Replace the stored rows wholesale.
    pub fn set_results(&mut self, results: ResultSet) {
        self.results = ResultState::Present(results);
    }

    #[must_use]
    pub const fn has_searched(&self) -> bool {
        matches!(self.results, ResultState::Present(_))
    }

    /// Rows to show and export.
    ///
    /// `None` both before the first search and after a search that matched
    /// nothing: neither case renders a table or offers an export.
    #[must_use]
    pub fn exportable(&self) -> Option<&[EventRecord]> {
        match &self.results {
            ResultState::Present(rows) if !rows.is_empty() => Some(rows),
            _ => None,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }
}
