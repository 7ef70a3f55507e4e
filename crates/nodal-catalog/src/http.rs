//! Status handling for FDSN event service responses.
//!
//! FDSN services answer 204 No Content when a query matches nothing and
//! report errors as plain text: a status line (`Error 400: Bad Request`),
//! a free-form reason, then usage and request echo sections. Nothing here
//! retries: a 429 is reported once with the server's `Retry-After` hint.

use crate::error::CatalogError;

/// Sections FDSN appends after the reason; never part of the message.
const TRAILER_PREFIXES: [&str; 4] = [
    "Usage details",
    "Request:",
    "Request Submitted:",
    "Service version:",
];

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success, 204 included. Handles:
/// - **429 Too Many Requests** → [`CatalogError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`CatalogError::Api`] with the status code and
///   the FDSN reason text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(CatalogError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(CatalogError::Api {
            status: resp.status().as_u16(),
            message: fdsn_reason(&resp.text().await.unwrap_or_default()),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

/// Status line and reason of an FDSN error body, e.g.
/// `Error 400: Bad Request - Bad date value: "2001-13-01"`.
fn fdsn_reason(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take_while(|line| !TRAILER_PREFIXES.iter().any(|prefix| line.starts_with(prefix)))
        .take(2)
        .collect::<Vec<_>>()
        .join(" - ")
}
