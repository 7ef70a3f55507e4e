//! Event summaries, nodal planes, and the flattened rows built from them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::lookup::{Lookup, lookup};

/// One matched seismic event as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    /// Catalog event id (e.g. `usp000ap8e`).
    pub id: String,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Depth in kilometres; some catalog events are published without one.
    pub depth: Option<f64>,
    /// Not every catalog event carries a magnitude.
    pub magnitude: Option<f64>,
}

/// One of the two conjugate fault-plane solutions of a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NodalPlane {
    pub strike: Lookup<String>,
    pub dip: Lookup<String>,
    pub rake: Lookup<String>,
}

impl NodalPlane {
    /// Read plane `index` (1 or 2) from a product's property mapping.
    ///
    /// Missing keys become [`Lookup::Absent`]; extraction never fails.
    #[must_use]
    pub fn from_properties(properties: &HashMap<String, String>, index: u8) -> Self {
        Self {
            strike: lookup(properties, &property_key(index, "strike")),
            dip: lookup(properties, &property_key(index, "dip")),
            rake: lookup(properties, &property_key(index, "rake")),
        }
    }
}

/// Product property key for a nodal-plane parameter, e.g. `nodal-plane-2-dip`.
#[must_use]
pub fn property_key(index: u8, parameter: &str) -> String {
    format!("nodal-plane-{index}-{parameter}")
}

/// A flattened result row: event summary plus both nodal planes.
///
/// Field order is the CSV and table column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub id: String,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: Option<f64>,
    pub magnitude: Option<f64>,
    pub strike_1: Lookup<String>,
    pub dip_1: Lookup<String>,
    pub rake_1: Lookup<String>,
    pub strike_2: Lookup<String>,
    pub dip_2: Lookup<String>,
    pub rake_2: Lookup<String>,
}

impl EventRecord {
    #[must_use]
    pub fn new(summary: EventSummary, plane_1: NodalPlane, plane_2: NodalPlane) -> Self {
        Self {
            id: summary.id,
            time: summary.time,
            latitude: summary.latitude,
            longitude: summary.longitude,
            depth: summary.depth,
            magnitude: summary.magnitude,
            strike_1: plane_1.strike,
            dip_1: plane_1.dip,
            rake_1: plane_1.rake,
            strike_2: plane_2.strike,
            dip_2: plane_2.dip,
            rake_2: plane_2.rake,
        }
    }

    /// Build a record straight from a product's property mapping.
    #[must_use]
    pub fn from_product_properties(
        summary: EventSummary,
        properties: &HashMap<String, String>,
    ) -> Self {
        Self::new(
            summary,
            NodalPlane::from_properties(properties, 1),
            NodalPlane::from_properties(properties, 2),
        )
    }

    #[must_use]
    pub fn plane(&self, index: u8) -> Option<NodalPlane> {
        match index {
            1 => Some(NodalPlane {
                strike: self.strike_1.clone(),
                dip: self.dip_1.clone(),
                rake: self.rake_1.clone(),
            }),
            2 => Some(NodalPlane {
                strike: self.strike_2.clone(),
                dip: self.dip_2.clone(),
                rake: self.rake_2.clone(),
            }),
            _ => None,
        }
    }
}

/// Ordered rows from one search, in the order the catalog returned them.
pub type ResultSet = Vec<EventRecord>;

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn summary(id: &str) -> EventSummary {
        EventSummary {
            id: id.to_string(),
            time: Utc.with_ymd_and_hms(2001, 9, 17, 2, 57, 0).unwrap(),
            latitude: -7.28,
            longitude: 129.56,
            depth: Some(120.4),
            magnitude: Some(6.1),
        }
    }

    fn full_properties() -> HashMap<String, String> {
        [
            ("nodal-plane-1-strike", "229"),
            ("nodal-plane-1-dip", "41"),
            ("nodal-plane-1-rake", "-74"),
            ("nodal-plane-2-strike", "27"),
            ("nodal-plane-2-dip", "51"),
            ("nodal-plane-2-rake", "-103"),
            ("scalar-moment", "1.6e18"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn property_keys_follow_catalog_naming() {
        assert_eq!(property_key(1, "strike"), "nodal-plane-1-strike");
        assert_eq!(property_key(2, "rake"), "nodal-plane-2-rake");
    }

    #[test]
    fn full_mapping_extracts_all_six_fields() {
        let record = EventRecord::from_product_properties(summary("ev1"), &full_properties());
        assert_eq!(record.strike_1, Lookup::Present("229".to_string()));
        assert_eq!(record.dip_1, Lookup::Present("41".to_string()));
        assert_eq!(record.rake_1, Lookup::Present("-74".to_string()));
        assert_eq!(record.strike_2, Lookup::Present("27".to_string()));
        assert_eq!(record.dip_2, Lookup::Present("51".to_string()));
        assert_eq!(record.rake_2, Lookup::Present("-103".to_string()));
        assert_eq!(record.id, "ev1");
        assert_eq!(record.magnitude, Some(6.1));
    }

    #[test]
    fn missing_keys_become_absent_individually() {
        let mut properties = full_properties();
        properties.remove("nodal-plane-1-dip");
        properties.remove("nodal-plane-2-strike");

        let record = EventRecord::from_product_properties(summary("ev2"), &properties);
        assert_eq!(record.dip_1, Lookup::Absent);
        assert_eq!(record.strike_2, Lookup::Absent);
        assert_eq!(record.strike_1, Lookup::Present("229".to_string()));
        assert_eq!(record.rake_2, Lookup::Present("-103".to_string()));
    }

    #[test]
    fn empty_mapping_still_yields_a_record() {
        let record = EventRecord::from_product_properties(summary("ev3"), &HashMap::new());
        let plane = record.plane(1).unwrap();
        assert_eq!(plane, NodalPlane::default());
        assert!(record.plane(3).is_none());
    }

    #[test]
    fn json_serializes_absent_fields_as_null() {
        let mut properties = full_properties();
        properties.remove("nodal-plane-2-rake");
        let record = EventRecord::from_product_properties(summary("ev4"), &properties);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["strike_1"], "229");
        assert!(value["rake_2"].is_null());
        assert_eq!(value["id"], "ev4");
    }
}
