//! Search the catalog and extract nodal planes from each matching event.
//!
//! Every remote call is awaited one after another. Failures never escape:
//! a failed search page ends the run with whatever was collected so far,
//! and a failed event (unreadable summary or detail) is reported and skipped.

use nodal_core::{EventRecord, EventSummary, Notice, NoticeSink, ProductType, ResultSet, SearchWindow};

use crate::{Catalog, CatalogError, search};

/// Run one search and build a record for every event that carries a product
/// of the window's product type.
///
/// Returns the records in catalog order. Notices go to `notices`:
/// - one error if the search itself fails (the run stops there)
/// - one error per event whose summary could not be read or whose detail
///   could not be fetched
/// - one info per event without a product of the requested type
pub async fn harvest<C, N>(catalog: &C, window: &SearchWindow, notices: &mut N) -> ResultSet
where
    C: Catalog + ?Sized,
    N: NoticeSink + ?Sized,
{
    let product_type = window.product_type;
    let mut records = ResultSet::new();
    let mut seen = 0usize;
    let mut pages = search(catalog, window);

    while let Some(page) = pages.next_page().await {
        let events = match page {
            Ok(events) => events,
            Err(error) => {
                tracing::warn!(%error, "event search failed");
                notices.notify(Notice::error(None, format!("event search failed: {error}")));
                break;
            }
        };

        for hit in events {
            seen += 1;
            let summary = match hit {
                Ok(summary) => summary,
                Err(bad) => {
                    tracing::warn!(event_id = %bad.event_id, reason = %bad.reason, "malformed event in search results");
                    notices.notify(Notice::error(
                        Some(&bad.event_id),
                        format!("failed to process event {}: {}", bad.event_id, bad.reason),
                    ));
                    continue;
                }
            };
            let event_id = summary.id.clone();
            match harvest_event(catalog, summary, product_type).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {
                    tracing::info!(event_id = %event_id, %product_type, "event has no product of requested type");
                    notices.notify(Notice::info(
                        Some(&event_id),
                        format!("event {event_id} has no {product_type} product"),
                    ));
                }
                Err(error) => {
                    tracing::warn!(event_id = %event_id, %error, "failed to process event");
                    notices.notify(Notice::error(
                        Some(&event_id),
                        format!("failed to process event {event_id}: {error}"),
                    ));
                }
            }
        }
    }

    tracing::info!(seen, kept = records.len(), %product_type, "harvest finished");
    records
}

/// Fetch one event's detail and flatten its first product of `product_type`.
///
/// Returns `Ok(None)` when the event has no such product.
///
/// # Errors
///
/// Returns [`CatalogError`] if the detail document cannot be fetched.
pub async fn harvest_event<C: Catalog + ?Sized>(
    catalog: &C,
    summary: EventSummary,
    product_type: ProductType,
) -> Result<Option<EventRecord>, CatalogError> {
    let detail = catalog.event_detail(&summary.id).await?;
    Ok(detail
        .products_of(product_type)
        .first()
        .map(|product| EventRecord::from_product_properties(summary, &product.properties)))
}
