use nodal_core::export::record_cells;
use nodal_core::{CSV_COLUMNS, EventRecord};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render result rows in the requested format.
///
/// Every format uses the export's column order and `N/A` for missing values.
pub fn render_records(records: &[EventRecord], format: OutputFormat) -> anyhow::Result<String> {
    let rows = records.iter().map(record_cells).collect::<Vec<_>>();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&row_views(&rows))?),
        OutputFormat::Raw => Ok(serde_json::to_string(&row_views(&rows))?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(table::render_table(&CSV_COLUMNS, &rows, options))
        }
    }
}

fn row_views(rows: &[Vec<String>]) -> Vec<RowView<'_>> {
    rows.iter().map(|cells| RowView(cells)).collect()
}

/// One row as a JSON object whose keys follow [`CSV_COLUMNS`].
struct RowView<'a>(&'a [String]);

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CSV_COLUMNS.len()))?;
        for (column, cell) in CSV_COLUMNS.iter().zip(self.0) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};
    use nodal_core::{EventRecord, EventSummary};
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> EventRecord {
        let properties = HashMap::from([
            ("nodal-plane-1-strike".to_string(), "229".to_string()),
            ("nodal-plane-1-dip".to_string(), "41".to_string()),
        ]);
        EventRecord::from_product_properties(
            EventSummary {
                id: "usp000ap8e".to_string(),
                time: Utc.timestamp_millis_opt(1_000_710_682_340).unwrap(),
                latitude: 7.061,
                longitude: 126.589,
                depth: Some(33.0),
                magnitude: Some(5.6),
            },
            &properties,
        )
    }

    #[test]
    fn json_keeps_column_order_and_markers() {
        let rendered = render_records(&[record()], OutputFormat::Raw).unwrap();
        assert_eq!(
            rendered,
            "[{\"id\":\"usp000ap8e\",\"time\":\"2001-09-17T07:11:22.340Z\",\
             \"latitude\":\"7.061\",\"longitude\":\"126.589\",\"depth\":\"33\",\
             \"magnitude\":\"5.6\",\"strike_1\":\"229\",\"dip_1\":\"41\",\
             \"rake_1\":\"N/A\",\"strike_2\":\"N/A\",\"dip_2\":\"N/A\",\"rake_2\":\"N/A\"}]"
        );
    }

    #[test]
    fn pretty_json_is_an_array() {
        let rendered = render_records(&[record(), record()], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[1]["rake_2"], "N/A");
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let rendered = render_records(&[record()], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        for column in CSV_COLUMNS {
            assert!(lines[0].contains(column), "missing header {column}");
        }
        assert!(lines[2].starts_with("usp000ap8e"));
        assert!(lines[2].contains("N/A"));
    }
}
