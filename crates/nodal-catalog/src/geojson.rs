//! GeoJSON documents returned by the FDSN event service.
//!
//! Search responses are a `FeatureCollection` of event summaries. Detail
//! responses are a single `Feature` whose `properties.products` maps each
//! product type to the list of product documents attached to the event.

use std::collections::HashMap;

use chrono::DateTime;
use nodal_core::{EventSummary, ProductType};
use serde::{Deserialize, Deserializer};

use crate::SearchHit;
use crate::error::MalformedEvent;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    /// Kept untyped so each feature is read on its own.
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

impl SearchResponse {
    /// One hit per feature, in page order.
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| read_feature(index, feature))
            .collect()
    }
}

fn read_feature(index: usize, feature: serde_json::Value) -> SearchHit {
    let event_id = feature
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| format!("feature #{}", index + 1), str::to_string);

    let feature: SummaryFeature =
        serde_json::from_value(feature).map_err(|error| malformed(&event_id, error.to_string()))?;
    EventSummary::try_from(feature)
}

fn malformed(event_id: &str, reason: impl Into<String>) -> MalformedEvent {
    MalformedEvent {
        event_id: event_id.to_string(),
        reason: reason.into(),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryFeature {
    pub id: String,
    pub properties: SummaryProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryProperties {
    /// Origin time, milliseconds since the Unix epoch.
    pub time: Option<i64>,
    pub mag: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    /// `[longitude, latitude, depth_km]`; depth may be null or left out.
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

impl TryFrom<SummaryFeature> for EventSummary {
    type Error = MalformedEvent;

    fn try_from(feature: SummaryFeature) -> Result<Self, Self::Error> {
        let Some(millis) = feature.properties.time else {
            return Err(malformed(&feature.id, "missing origin time"));
        };
        let time = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| malformed(&feature.id, format!("origin time {millis} is out of range")))?;

        let coordinates = feature
            .geometry
            .map(|g| g.coordinates)
            .unwrap_or_default();
        let (Some(Some(longitude)), Some(Some(latitude))) =
            (coordinates.first().copied(), coordinates.get(1).copied())
        else {
            return Err(malformed(
                &feature.id,
                format!("expected [lon, lat, depth] coordinates, got {coordinates:?}"),
            ));
        };

        Ok(Self {
            id: feature.id,
            time,
            latitude,
            longitude,
            depth: coordinates.get(2).copied().flatten(),
            magnitude: feature.properties.mag,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailResponse {
    pub id: String,
    pub properties: DetailProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailProperties {
    #[serde(default)]
    pub products: HashMap<String, Vec<ProductDocument>>,
}

/// Full detail of one event: every product attached to it, by type.
#[derive(Debug, Clone, Default)]
pub struct EventDetail {
    pub id: String,
    pub products: HashMap<String, Vec<ProductDocument>>,
}

impl EventDetail {
    /// Products of `product_type`, in the order the catalog lists them.
    #[must_use]
    pub fn products_of(&self, product_type: ProductType) -> &[ProductDocument] {
        self.products
            .get(product_type.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<DetailResponse> for EventDetail {
    fn from(response: DetailResponse) -> Self {
        Self {
            id: response.id,
            products: response.properties.products,
        }
    }
}

/// One product document (e.g. a focal mechanism from one contributing network).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDocument {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "updateTime", default)]
    pub update_time: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    /// Product properties, values as published. Nulls are dropped and
    /// non-string scalars are kept in their JSON text form.
    #[serde(default, deserialize_with = "string_properties")]
    pub properties: HashMap<String, String>,
}

fn string_properties<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
