//! Payload mass range selected on the slider.

use serde::Serialize;
use spacex_launch::LaunchDataset;

/// Lower edge of the slider domain (kg).
pub const PAYLOAD_DOMAIN_MIN: f64 = 0.0;
/// Upper edge of the slider domain (kg).
pub const PAYLOAD_DOMAIN_MAX: f64 = 18000.0;
/// Slider step and mark spacing (kg).
pub const PAYLOAD_STEP: f64 = 1000.0;

/// Inclusive payload range `[low, high]`, always ordered and inside the
/// slider domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range from two slider values. Reversed bounds are swapped and
    /// both ends are clamped into `[0, 18000]`; a NaN end falls back to the
    /// domain edge on its side.
    pub fn new(low: f64, high: f64) -> Self {
        let low = if low.is_nan() { PAYLOAD_DOMAIN_MIN } else { low };
        let high = if high.is_nan() { PAYLOAD_DOMAIN_MAX } else { high };
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        Self {
            low: low.clamp(PAYLOAD_DOMAIN_MIN, PAYLOAD_DOMAIN_MAX),
            high: high.clamp(PAYLOAD_DOMAIN_MIN, PAYLOAD_DOMAIN_MAX),
        }
    }

    /// The whole slider domain.
    pub fn full() -> Self {
        Self::new(PAYLOAD_DOMAIN_MIN, PAYLOAD_DOMAIN_MAX)
    }

    /// Initial slider value: the dataset's payload bounds.
    pub fn from_dataset(dataset: &LaunchDataset) -> Self {
        let (min, max) = dataset.payload_bounds();
        Self::new(min, max)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Whether `mass` lies in `[low, high]`.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Labelled slider marks, one per step from 0 through 18000.
pub fn slider_marks() -> Vec<(f64, String)> {
    let steps = ((PAYLOAD_DOMAIN_MAX - PAYLOAD_DOMAIN_MIN) / PAYLOAD_STEP) as u32;
    (0..=steps)
        .map(|i| {
            let value = PAYLOAD_DOMAIN_MIN + f64::from(i) * PAYLOAD_STEP;
            (value, format!("{}", value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_range_is_kept() {
        let range = PayloadRange::new(2000.0, 5000.0);
        assert_eq!((range.low(), range.high()), (2000.0, 5000.0));
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let range = PayloadRange::new(9000.0, 1000.0);
        assert_eq!((range.low(), range.high()), (1000.0, 9000.0));
    }

    #[test]
    fn out_of_domain_is_clamped() {
        let range = PayloadRange::new(-500.0, 25000.0);
        assert_eq!((range.low(), range.high()), (0.0, 18000.0));

        let above = PayloadRange::new(19000.0, 20000.0);
        assert_eq!((above.low(), above.high()), (18000.0, 18000.0));
    }

    #[test]
    fn nan_falls_back_to_domain_edges() {
        let range = PayloadRange::new(f64::NAN, f64::NAN);
        assert_eq!(range, PayloadRange::full());
    }

    #[test]
    fn contains_is_inclusive() {
        let range = PayloadRange::new(1000.0, 3000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(3000.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(999.9));
        assert!(!range.contains(3000.1));
    }

    #[test]
    fn marks_cover_domain() {
        let marks = slider_marks();
        assert_eq!(marks.len(), 19);
        assert_eq!(marks[0], (0.0, "0".to_string()));
        assert_eq!(marks[1], (1000.0, "1000".to_string()));
        assert_eq!(marks[18], (18000.0, "18000".to_string()));
    }
}
