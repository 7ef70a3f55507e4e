//! HTTP client for the USGS ComCat FDSN event service.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nodal_core::SearchWindow;

use crate::geojson::{DetailResponse, EventDetail, SearchResponse};
use crate::http::check_response;
use crate::{Catalog, CatalogError, MAX_PAGE_SIZE, SearchHit};

/// Connection settings for [`CatalogClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Service root; `query` is appended to it.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub page_size: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: String::from("https://earthquake.usgs.gov/fdsnws/event/1/"),
            user_agent: String::from("nodal/0.1"),
            timeout: Duration::from_secs(30),
            page_size: MAX_PAGE_SIZE,
        }
    }
}

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    page_size: usize,
}

impl CatalogClient {
    /// Create a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(options: ClientOptions) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .build()?;

        let mut base_url = options.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            base_url,
            page_size: options.page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    /// Search URL for one page of `window`.
    ///
    /// Bounds are written exactly as given, inverted ranges included.
    #[must_use]
    pub fn search_url(&self, window: &SearchWindow, offset: usize, limit: usize) -> String {
        let params = [
            ("format", String::from("geojson")),
            ("starttime", fdsn_time(&window.start)),
            ("endtime", fdsn_time(&window.end)),
            ("minlatitude", window.min_latitude.to_string()),
            ("maxlatitude", window.max_latitude.to_string()),
            ("minlongitude", window.min_longitude.to_string()),
            ("maxlongitude", window.max_longitude.to_string()),
            ("minmagnitude", window.min_magnitude.to_string()),
            ("maxmagnitude", window.max_magnitude.to_string()),
            ("producttype", window.product_type.as_str().to_string()),
            ("orderby", String::from("time")),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        format!("{}query?{}", self.base_url, encode_query(&params))
    }

    /// Detail URL for one event.
    #[must_use]
    pub fn detail_url(&self, event_id: &str) -> String {
        format!(
            "{}query?eventid={}&format=geojson",
            self.base_url,
            urlencoding::encode(event_id)
        )
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    fn page_size(&self) -> usize {
        self.page_size
    }

    async fn search_page(
        &self,
        window: &SearchWindow,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<SearchHit>, CatalogError> {
        let url = self.search_url(window, offset, limit);
        tracing::debug!(%url, "catalog search");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        // FDSN services answer 204 when nothing matches.
        if resp.status() == 204 {
            return Ok(Vec::new());
        }

        let data: SearchResponse = resp.json().await?;
        Ok(data.into_hits())
    }

    async fn event_detail(&self, event_id: &str) -> Result<EventDetail, CatalogError> {
        let url = self.detail_url(event_id);
        tracing::debug!(%url, "catalog event detail");

        let resp = self.http.get(&url).send().await?;
        if resp.status() == 404 {
            return Err(CatalogError::EventNotFound(event_id.to_string()));
        }
        let resp = check_response(resp).await?;

        let data: DetailResponse = resp.json().await?;
        Ok(EventDetail::from(data))
    }
}

/// UTC timestamp in the form FDSN services accept (`2001-09-17T23:59:59.999`).
fn fdsn_time(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

fn encode_query(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use nodal_core::ProductType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base_url: &str) -> CatalogClient {
        CatalogClient::new(ClientOptions {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn window() -> SearchWindow {
        let day = NaiveDate::from_ymd_opt(2001, 9, 17).unwrap();
        SearchWindow::for_dates(ProductType::FocalMechanism, day, day)
            .with_latitude(5.0, 10.0)
            .with_longitude(120.0, 130.0)
            .with_magnitude(5.0, 7.5)
    }

    #[test]
    fn search_url_carries_every_bound() {
        let url = client("https://earthquake.usgs.gov/fdsnws/event/1/").search_url(&window(), 1, 20_000);
        assert_eq!(
            url,
            "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson\
             &starttime=2001-09-17T00%3A00%3A00.000\
             &endtime=2001-09-17T23%3A59%3A59.999\
             &minlatitude=5&maxlatitude=10\
             &minlongitude=120&maxlongitude=130\
             &minmagnitude=5&maxmagnitude=7.5\
             &producttype=focal-mechanism&orderby=time&limit=20000&offset=1"
        );
    }

    #[test]
    fn search_url_passes_inverted_bounds_through() {
        let inverted = window().with_magnitude(1.0, 0.0).with_longitude(-0.0, -0.0);
        let url = client("http://localhost/").search_url(&inverted, 1, 10);
        assert!(url.contains("minmagnitude=1&maxmagnitude=0"));
        assert!(url.contains("minlongitude=-0&maxlongitude=-0"));
    }

    #[test]
    fn moment_tensor_window_filters_on_moment_tensor() {
        let mut w = window();
        w.product_type = ProductType::MomentTensor;
        let url = client("http://localhost/").search_url(&w, 20_001, 20_000);
        assert!(url.contains("producttype=moment-tensor"));
        assert!(url.ends_with("limit=20000&offset=20001"));
    }

    #[test]
    fn detail_url_encodes_event_id() {
        let c = client("http://localhost:8080/fdsnws/event/1");
        assert_eq!(
            c.detail_url("us 7000abcd"),
            "http://localhost:8080/fdsnws/event/1/query?eventid=us%207000abcd&format=geojson"
        );
    }

    #[test]
    fn page_size_is_clamped() {
        let c = CatalogClient::new(ClientOptions {
            page_size: 50_000,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(c.page_size(), MAX_PAGE_SIZE);
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_search_single_day() {
        let c = CatalogClient::new(ClientOptions::default()).unwrap();
        let day = NaiveDate::from_ymd_opt(2001, 9, 17).unwrap();
        let w = SearchWindow::for_dates(ProductType::FocalMechanism, day, day)
            .with_latitude(-90.0, 90.0)
            .with_longitude(-180.0, 180.0)
            .with_magnitude(5.0, 10.0);

        let hits = c.search_page(&w, 1, 100).await.unwrap();
        println!("── {} events on 2001-09-17", hits.len());
        for hit in &hits {
            match hit {
                Ok(event) => println!("  {} {} M{:?}", event.id, event.time, event.magnitude),
                Err(bad) => println!("  {bad}"),
            }
        }
    }
}
