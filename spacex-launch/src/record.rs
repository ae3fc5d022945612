use serde::{Deserialize, Serialize};

/// Binary launch result, stored as the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Both outcomes, ordered by class value.
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// The numeric class value as it appears in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Chart label for this outcome.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl TryFrom<i64> for Outcome {
    type Error = String;

    fn try_from(class: i64) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, found {}", other)),
        }
    }
}

/// One launch from the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub launch_site: String,
    pub outcome: Outcome,
    /// Payload mass in kilograms (finite, non-negative)
    pub payload_mass_kg: f64,
    /// Full booster designation (e.g. "F9 FT B1021.1"), when the column exists
    pub booster_version: Option<String>,
    /// Booster family (e.g. "v1.1", "FT", "B4")
    pub booster_version_category: String,
}

/// A CSV row exactly as deserialized, before domain checks.
///
/// Columns are matched by header name; anything not listed here (such as the
/// unnamed index column) is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawLaunchRow {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl TryFrom<RawLaunchRow> for LaunchRecord {
    type Error = String;

    fn try_from(row: RawLaunchRow) -> Result<Self, Self::Error> {
        if row.launch_site.is_empty() {
            return Err("launch site is empty".to_string());
        }
        if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
            return Err(format!(
                "payload mass must be a non-negative number, found {}",
                row.payload_mass_kg
            ));
        }
        let outcome = Outcome::try_from(row.class)?;
        Ok(LaunchRecord {
            flight_number: row.flight_number,
            launch_site: row.launch_site,
            outcome,
            payload_mass_kg: row.payload_mass_kg,
            booster_version: row.booster_version.filter(|v| !v.is_empty()),
            booster_version_category: row.booster_version_category,
        })
    }
}
