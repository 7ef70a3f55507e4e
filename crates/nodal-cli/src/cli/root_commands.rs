use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use nodal_core::{ProductType, SearchWindow};

/// Top-level command tree.
///
/// The two product commands are thin configurations over the same search
/// and export pipeline.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search focal-mechanism products (for moment tensors use `nodal moment-tensor`).
    #[command(name = "focal-mechanism", visible_alias = "fm")]
    FocalMechanism(SearchArgs),
    /// Search moment-tensor products (for focal mechanisms use `nodal focal-mechanism`).
    #[command(name = "moment-tensor", visible_alias = "mt")]
    MomentTensor(SearchArgs),
    /// Interactive session: search repeatedly, rename, and export.
    Shell(ShellArgs),
}

/// Search form fields.
#[derive(Clone, Debug, Args)]
pub struct WindowArgs {
    /// First day of the search (UTC, YYYY-MM-DD).
    #[arg(long, default_value = "2001-09-17")]
    pub start_date: NaiveDate,
    /// Last day of the search, inclusive through 23:59:59.999999.
    #[arg(long, default_value = "2001-09-17")]
    pub end_date: NaiveDate,
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub min_latitude: f64,
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub max_latitude: f64,
    #[arg(long, default_value = "-0.0", allow_negative_numbers = true)]
    pub min_longitude: f64,
    #[arg(long, default_value = "-0.0", allow_negative_numbers = true)]
    pub max_longitude: f64,
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub min_magnitude: f64,
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub max_magnitude: f64,
}

impl WindowArgs {
    /// Bounds are passed through unchanged, even when min > max.
    #[must_use]
    pub fn to_window(&self, product_type: ProductType) -> SearchWindow {
        SearchWindow::for_dates(product_type, self.start_date, self.end_date)
            .with_latitude(self.min_latitude, self.max_latitude)
            .with_longitude(self.min_longitude, self.max_longitude)
            .with_magnitude(self.min_magnitude, self.max_magnitude)
    }
}

/// Export options.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Export file name without extension (defaults per product type).
    #[arg(long)]
    pub file_name: Option<String>,
    /// Directory the CSV is written into (defaults to `export.directory`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Print the results without writing a CSV.
    #[arg(long)]
    pub no_export: bool,
}

/// Arguments for `nodal focal-mechanism` / `nodal moment-tensor`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub window: WindowArgs,
    #[command(flatten)]
    pub export: ExportArgs,
}

/// Arguments for `nodal shell`.
#[derive(Clone, Debug, Args)]
pub struct ShellArgs {
    /// Product type searched in this session: focal-mechanism (fm) or moment-tensor (mt).
    #[arg(long, default_value = "focal-mechanism")]
    pub product: ProductType,
    /// Directory exports are written into (defaults to `export.directory`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}
