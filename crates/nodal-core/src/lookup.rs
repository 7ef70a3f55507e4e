//! Present-or-absent field lookups against product property mappings.
//!
//! A product that lacks a nodal-plane key yields [`Lookup::Absent`]. The
//! `N/A` placeholder only appears when a value is rendered for output, so a
//! product that genuinely publishes the text `N/A` stays distinguishable.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder written wherever an absent field is rendered.
pub const NOT_AVAILABLE: &str = "N/A";

/// A field read from a source mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lookup<T> {
    Present(T),
    #[default]
    Absent,
}

impl<T> Lookup<T> {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::Present(value) => Lookup::Present(value),
            Self::Absent => Lookup::Absent,
        }
    }

    /// Convert into an `Option`, dropping the absent marker.
    #[must_use]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        self.present().unwrap_or(default)
    }
}

impl<T: fmt::Display> Lookup<T> {
    /// Render for output, substituting [`NOT_AVAILABLE`] when absent.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Present(value) => value.to_string(),
            Self::Absent => NOT_AVAILABLE.to_string(),
        }
    }
}

impl<T: AsRef<str>> Lookup<T> {
    /// Numeric interpretation of the value in degrees, if it parses.
    #[must_use]
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Self::Present(value) => value.as_ref().trim().parse().ok(),
            Self::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl<T: Serialize> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Read `key` from `mapping`.
#[must_use]
pub fn lookup<V: Clone>(mapping: &HashMap<String, V>, key: &str) -> Lookup<V> {
    mapping.get(key).cloned().into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mapping() -> HashMap<String, String> {
        HashMap::from([
            ("nodal-plane-1-strike".to_string(), "229.26".to_string()),
            ("literal".to_string(), NOT_AVAILABLE.to_string()),
        ])
    }

    #[test]
    fn present_key_returns_value() {
        assert_eq!(
            lookup(&mapping(), "nodal-plane-1-strike"),
            Lookup::Present("229.26".to_string())
        );
    }

    #[test]
    fn missing_key_is_absent() {
        let value = lookup(&mapping(), "nodal-plane-2-rake");
        assert_eq!(value, Lookup::Absent);
        assert_eq!(value.render(), "N/A");
        assert_eq!(value.unwrap_or("fallback".to_string()), "fallback");
    }

    #[test]
    fn literal_marker_text_stays_present() {
        let value = lookup(&mapping(), "literal");
        assert!(value.is_present());
        assert_eq!(value.render(), NOT_AVAILABLE);
    }

    #[test]
    fn degrees_parses_numeric_text() {
        let value = lookup(&mapping(), "nodal-plane-1-strike");
        assert_eq!(value.degrees(), Some(229.26));
        assert_eq!(lookup(&mapping(), "literal").degrees(), None);
        assert_eq!(Lookup::<String>::Absent.degrees(), None);
    }

    #[test]
    fn serializes_absent_as_null() {
        let present = serde_json::to_string(&Lookup::Present("12")).unwrap();
        let absent = serde_json::to_string(&Lookup::<&str>::Absent).unwrap();
        assert_eq!(present, "\"12\"");
        assert_eq!(absent, "null");
    }
}
