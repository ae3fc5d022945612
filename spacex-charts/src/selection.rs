//! Launch-site selection and the options shown in the site dropdown.

use serde::Serialize;
use spacex_launch::{LaunchDataset, LaunchRecord};
use std::fmt;

/// Dropdown value reserved for "no site filter".
pub const ALL_SITES_VALUE: &str = "ALL";
/// Dropdown label for the sentinel option.
pub const ALL_SITES_LABEL: &str = "All sites";

/// Current value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. The sentinel maps to `All`; anything
    /// else names a site, known or not.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_SITES_VALUE || value.is_empty() {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value this selection corresponds to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES_LABEL),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// A (label, value) pair for the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// The sentinel option followed by one option per distinct site, in the
/// order sites first appear in the dataset.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    })
    .chain(dataset.sites().iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS,1,500,v1.0
2,KSC,1,3000,FT
3,CCAFS,0,1500,v1.0
";

    #[test]
    fn sentinel_round_trips() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::All.value(), "ALL");
        assert_eq!(SiteSelection::All.to_string(), "All sites");
    }

    #[test]
    fn concrete_site_value() {
        let selection = SiteSelection::from_value("KSC LC-39A");
        assert_eq!(selection, SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(selection.value(), "KSC LC-39A");
    }

    #[test]
    fn blank_value_means_all() {
        assert_eq!(SiteSelection::from_value("  "), SiteSelection::All);
    }

    #[test]
    fn options_start_with_sentinel() {
        let dataset = LaunchDataset::from_csv_str(CSV).unwrap();
        let options = site_options(&dataset);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "CCAFS", "KSC"]);
        assert_eq!(options[0].label, "All sites");
        assert_eq!(options[1].label, "CCAFS");
    }

    #[test]
    fn matches_filters_by_site() {
        let dataset = LaunchDataset::from_csv_str(CSV).unwrap();
        let ksc = SiteSelection::from_value("KSC");
        let matched: Vec<u32> = dataset
            .records()
            .iter()
            .filter(|r| ksc.matches(r))
            .map(|r| r.flight_number)
            .collect();
        assert_eq!(matched, vec![2]);
        assert!(dataset.records().iter().all(|r| SiteSelection::All.matches(r)));
    }
}
