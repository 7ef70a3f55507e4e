//! CSV export of result sets.
//!
//! The column order is fixed and matches [`EventRecord`]'s field order. Absent
//! values are written as [`NOT_AVAILABLE`], never as empty fields.

use chrono::SecondsFormat;

use crate::errors::CoreError;
use crate::event::EventRecord;
use crate::lookup::NOT_AVAILABLE;

/// Header row of every export.
pub const CSV_COLUMNS: [&str; 12] = [
    "id",
    "time",
    "latitude",
    "longitude",
    "depth",
    "magnitude",
    "strike_1",
    "dip_1",
    "rake_1",
    "strike_2",
    "dip_2",
    "rake_2",
];

pub const CSV_MIME: &str = "text/csv";

/// Render one record into its output cells, in [`CSV_COLUMNS`] order.
#[must_use]
pub fn record_cells(record: &EventRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.time.to_rfc3339_opts(SecondsFormat::Millis, true),
        record.latitude.to_string(),
        record.longitude.to_string(),
        optional_cell(record.depth),
        optional_cell(record.magnitude),
        record.strike_1.render(),
        record.dip_1.render(),
        record.rake_1.render(),
        record.strike_2.render(),
        record.dip_2.render(),
        record.rake_2.render(),
    ]
}

fn optional_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// Serialize records to UTF-8 CSV with a header row.
///
/// # Errors
///
/// Returns [`CoreError::Csv`] if a row cannot be written.
pub fn to_csv(records: &[EventRecord]) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.write_record(record_cells(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| CoreError::Buffer(e.to_string()))
}

/// Parse an export back into rows of cells (header excluded).
///
/// # Errors
///
/// Returns [`CoreError::Header`] if the header row differs from
/// [`CSV_COLUMNS`], or [`CoreError::Csv`] on malformed input.
pub fn read_csv(data: &[u8]) -> Result<Vec<Vec<String>>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if !headers.iter().eq(CSV_COLUMNS) {
        return Err(CoreError::Header(headers.iter().collect::<Vec<_>>().join(",")));
    }

    reader
        .records()
        .map(|row| {
            row.map(|r| r.iter().map(str::to_string).collect())
                .map_err(CoreError::from)
        })
        .collect()
}

/// A downloadable export: file name, MIME type, and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build the CSV attachment `<base_name>.csv` for `records`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFileName`] if `base_name` is blank or
    /// contains a path separator, or a CSV error from [`to_csv`].
    pub fn csv(base_name: &str, records: &[EventRecord]) -> Result<Self, CoreError> {
        validate_file_name(base_name)?;
        Ok(Self {
            file_name: format!("{base_name}.csv"),
            mime: CSV_MIME,
            bytes: to_csv(records)?,
        })
    }
}

fn validate_file_name(name: &str) -> Result<(), CoreError> {
    let reason = if name.trim().is_empty() {
        Some("file name is empty")
    } else if name.contains(['/', '\\']) {
        Some("file name must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CoreError::InvalidFileName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
