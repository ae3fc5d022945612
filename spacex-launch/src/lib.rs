//! Launch record types and the CSV dataset loader for the SpaceX launch
//! dashboard.
//!
//! The dataset is read once (from a file for native tools, or from a string
//! embedded with `include_str!` in the WASM dashboard) into an immutable
//! [`LaunchDataset`]. Everything downstream works on borrowed views of it.
//!
//! # Usage
//!
//! ```rust
//! use spacex_launch::LaunchDataset;
//!
//! let csv = "\
//! Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
//! 1,CCAFS LC-40,1,500.0,v1.0
//! 2,KSC LC-39A,0,3000.0,FT
//! ";
//! let dataset = LaunchDataset::from_csv_str(csv).unwrap();
//! assert_eq!(dataset.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
//! assert_eq!(dataset.payload_bounds(), (500.0, 3000.0));
//! ```

pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::{LaunchDataset, REQUIRED_COLUMNS};
pub use error::{LoadError, Result};
pub use record::{LaunchRecord, Outcome};
