use std::io::Write;

use nodal_catalog::{Catalog, harvest};
use nodal_core::{Notice, NoticeSink, SearchWindow, Session};

use crate::cli::OutputFormat;
use crate::output;
use crate::progress::Progress;

/// Counts of what one search produced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchOutcome {
    pub kept: usize,
    pub skipped: usize,
    pub failed: usize,
    /// The catalog search itself failed; `kept` holds what was collected before.
    pub search_failed: bool,
}

/// Prints notices on stderr as they arrive and tallies them.
struct ConsoleNotices<'a> {
    progress: &'a Progress,
    quiet: bool,
    outcome: SearchOutcome,
}

impl NoticeSink for ConsoleNotices<'_> {
    fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            if notice.event_id.is_none() {
                self.outcome.search_failed = true;
            } else {
                self.outcome.failed += 1;
            }
            self.progress.println(&format!("error: {notice}"));
        } else {
            self.outcome.skipped += 1;
            if !self.quiet {
                self.progress.println(&format!("info: {notice}"));
            }
        }
    }
}

/// Run one search and store its rows in `session`, replacing earlier rows.
pub async fn run_search(
    session: &mut Session,
    catalog: &dyn Catalog,
    window: &SearchWindow,
    quiet: bool,
) -> SearchOutcome {
    let progress = Progress::spinner(&format!("searching {} events", window.product_type));
    let mut notices = ConsoleNotices {
        progress: &progress,
        quiet,
        outcome: SearchOutcome::default(),
    };

    let records = harvest(catalog, window, &mut notices).await;
    progress.finish_clear();

    let mut outcome = notices.outcome;
    outcome.kept = records.len();
    session.set_results(records);

    if !quiet {
        eprintln!(
            "{} events with {} data ({} skipped, {} failed)",
            outcome.kept,
            session.product_type(),
            outcome.skipped,
            outcome.failed
        );
    }
    outcome
}

/// Write the session's rows to `out`.
///
/// Returns `false`, writing nothing, when there is nothing to show.
pub fn present<W: Write>(session: &Session, format: OutputFormat, out: &mut W) -> anyhow::Result<bool> {
    let Some(rows) = session.exportable() else {
        return Ok(false);
    };
    writeln!(out, "{}", output::render_records(rows, format)?)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use nodal_catalog::{CatalogError, EventDetail, ProductDocument, SearchHit};
    use nodal_core::{EventSummary, ProductType};

    use super::*;

    /// One full page of two events, then a failing second page.
    struct FailingSecondPage;

    #[async_trait]
    impl Catalog for FailingSecondPage {
        fn page_size(&self) -> usize {
            2
        }

        async fn search_page(
            &self,
            _window: &SearchWindow,
            offset: usize,
            _limit: usize,
        ) -> Result<Vec<SearchHit>, CatalogError> {
            if offset > 1 {
                return Err(CatalogError::Api {
                    status: 503,
                    message: "Error 503: Service Temporarily Unavailable".to_string(),
                });
            }
            Ok(["s1", "s2"]
                .into_iter()
                .map(|id| {
                    Ok(EventSummary {
                        id: id.to_string(),
                        time: Utc::now(),
                        latitude: 0.0,
                        longitude: 0.0,
                        depth: None,
                        magnitude: None,
                    })
                })
                .collect())
        }

        async fn event_detail(&self, event_id: &str) -> Result<EventDetail, CatalogError> {
            Ok(EventDetail {
                id: event_id.to_string(),
                products: HashMap::from([(
                    "focal-mechanism".to_string(),
                    vec![ProductDocument::default()],
                )]),
            })
        }
    }

    #[tokio::test]
    async fn later_page_failure_keeps_and_presents_earlier_rows() {
        let day = NaiveDate::from_ymd_opt(2001, 9, 17).unwrap();
        let window = SearchWindow::for_dates(ProductType::FocalMechanism, day, day);
        let mut session = Session::new(ProductType::FocalMechanism);

        let outcome = run_search(&mut session, &FailingSecondPage, &window, true).await;
        assert!(outcome.search_failed);
        assert_eq!(outcome.kept, 2);
        assert_eq!(outcome.failed, 0);

        let mut out = Vec::new();
        assert!(present(&session, OutputFormat::Raw, &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("\"id\":\"s2\""));
    }

    #[test]
    fn notices_are_tallied_by_kind() {
        let progress = Progress::spinner("test");
        let mut sink = ConsoleNotices {
            progress: &progress,
            quiet: true,
            outcome: SearchOutcome::default(),
        };
        sink.notify(Notice::info(Some("a"), "event a has no focal-mechanism product"));
        sink.notify(Notice::error(Some("b"), "failed to process event b"));
        sink.notify(Notice::error(None, "event search failed"));

        assert_eq!(
            sink.outcome,
            SearchOutcome {
                kept: 0,
                skipped: 1,
                failed: 1,
                search_failed: true,
            }
        );
    }

    #[test]
    fn nothing_is_presented_before_a_search() {
        let session = Session::new(ProductType::FocalMechanism);
        let mut out = Vec::new();
        assert!(!present(&session, OutputFormat::Table, &mut out).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn empty_results_are_not_presented() {
        let mut session = Session::new(ProductType::FocalMechanism);
        session.set_results(Vec::new());
        let mut out = Vec::new();
        assert!(!present(&session, OutputFormat::Json, &mut out).unwrap());
        assert!(out.is_empty());
    }
}
