//! Search windows: time span, bounding box, magnitude range, product type.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::product::ProductType;

/// Inputs to one catalog query.
///
/// Bounds are not validated: an inverted range (min > max) is sent to the
/// catalog exactly as entered and the catalog decides what it means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchWindow {
    /// Inclusive start instant (UTC).
    pub start: DateTime<Utc>,
    /// Inclusive end instant (UTC).
    pub end: DateTime<Utc>,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_magnitude: f64,
    pub max_magnitude: f64,
    pub product_type: ProductType,
}

impl SearchWindow {
    /// Build a window spanning whole calendar days.
    ///
    /// `start_date` begins at midnight and `end_date` runs to its last
    /// microsecond. Geographic and magnitude bounds start from the search
    /// form's defaults (`0.0`/`0.0`, `-0.0`/`-0.0`, `1.0`/`0.0`) and are meant
    /// to be overridden with the `with_*` methods.
    #[must_use]
    pub fn for_dates(product_type: ProductType, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start: start_of_day(start_date),
            end: end_of_day(end_date),
            min_latitude: 0.0,
            max_latitude: 0.0,
            min_longitude: -0.0,
            max_longitude: -0.0,
            min_magnitude: 1.0,
            max_magnitude: 0.0,
            product_type,
        }
    }

    #[must_use]
    pub const fn with_latitude(mut self, min: f64, max: f64) -> Self {
        self.min_latitude = min;
        self.max_latitude = max;
        self
    }

    #[must_use]
    pub const fn with_longitude(mut self, min: f64, max: f64) -> Self {
        self.min_longitude = min;
        self.max_longitude = max;
        self
    }

    #[must_use]
    pub const fn with_magnitude(mut self, min: f64, max: f64) -> Self {
        self.min_magnitude = min;
        self.max_magnitude = max;
        self
    }
}

/// Midnight UTC at the start of `date`.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Last representable microsecond of `date` (23:59:59.999999 UTC).
#[must_use]
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::microseconds(1)
}
