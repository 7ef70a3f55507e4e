//! # nodal-core
//!
//! Core types shared by every nodal crate.
//!
//! This crate provides:
//! - The product-type selector (`focal-mechanism` / `moment-tensor`)
//! - Search windows with end-of-day normalization
//! - Event summaries, nodal planes, and flattened event records
//! - The `Lookup` sum type used for absent-vs-present product fields
//! - User-visible notices emitted while harvesting
//! - The per-session result store
//! - CSV export and re-import of result sets
//!
//! Nothing in here performs network I/O.

pub mod errors;
pub mod event;
pub mod export;
pub mod lookup;
pub mod notice;
pub mod product;
pub mod session;
pub mod window;

pub use errors::CoreError;
pub use event::{EventRecord, EventSummary, NodalPlane, ResultSet};
pub use export::{Attachment, CSV_COLUMNS, CSV_MIME};
pub use lookup::{Lookup, NOT_AVAILABLE, lookup};
pub use notice::{Notice, NoticeLevel, NoticeSink};
pub use product::ProductType;
pub use session::{ResultState, Session};
pub use window::SearchWindow;
