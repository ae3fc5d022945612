//! In-memory launch dataset and its CSV loader.
//!
//! # CSV Format
//!
//! Comma-delimited with a header row. Columns are matched by name, so order
//! does not matter and extra columns are ignored:
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```

use crate::error::{LoadError, Result};
use crate::record::{LaunchRecord, RawLaunchRow};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Flight Number",
    "Booster Version Category",
];

/// The full, read-only set of launch records plus values derived once at
/// load time.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchDataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading launch records from {}", path.display());
        Self::from_reader(file)
    }

    /// Load the dataset from CSV text (typically embedded via `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV byte source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (index, row) in rdr.deserialize::<RawLaunchRow>().enumerate() {
            let raw = row?;
            // Line 1 is the header row
            let record = LaunchRecord::try_from(raw)
                .map_err(|reason| LoadError::InvalidRecord { line: index + 2, reason })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Build a dataset from already-validated records, deriving the payload
    /// bounds and the distinct site list.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::new();
        let mut sites = Vec::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for record in &records {
            if seen.insert(record.launch_site.as_str()) {
                sites.push(record.launch_site.clone());
            }
            payload_min = payload_min.min(record.payload_mass_kg);
            payload_max = payload_max.max(record.payload_mass_kg);
        }

        log::info!(
            "Loaded {} launch records across {} sites (payload {} - {} kg)",
            records.len(),
            sites.len(),
            payload_min,
            payload_max
        );

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch-site labels in first-seen order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Minimum and maximum payload mass (kg) across all records.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records launched from `site`, in dataset order.
    pub fn records_at<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.launch_site == site)
    }

    /// Number of successful launches across the whole dataset.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}
