//! Defines the `AqiCategory` bands an overall AQI value falls into.

use serde::Serialize;
use std::fmt;

/// Health category of an AQI value.
///
/// Bands are inclusive on their upper bound: 50 is still `Good`, 51 is `Moderate`.
/// A missing AQI maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AqiCategory {
    /// 0 to 50.
    Good,
    /// 51 to 100.
    Moderate,
    /// 101 to 150.
    UnhealthyForSensitiveGroups,
    /// 151 to 200.
    Unhealthy,
    /// 201 to 300.
    VeryUnhealthy,
    /// Above 300.
    Hazardous,
    /// No AQI could be derived.
    Unknown,
}

impl AqiCategory {
    /// Categorizes an AQI value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use airq::AqiCategory;
    ///
    /// assert_eq!(AqiCategory::from_aqi(Some(50)), AqiCategory::Good);
    /// assert_eq!(AqiCategory::from_aqi(Some(51)), AqiCategory::Moderate);
    /// assert_eq!(AqiCategory::from_aqi(None), AqiCategory::Unknown);
    /// ```
    pub fn from_aqi(aqi: Option<u32>) -> Self {
        match aqi {
            None => AqiCategory::Unknown,
            Some(0..=50) => AqiCategory::Good,
            Some(51..=100) => AqiCategory::Moderate,
            Some(101..=150) => AqiCategory::UnhealthyForSensitiveGroups,
            Some(151..=200) => AqiCategory::Unhealthy,
            Some(201..=300) => AqiCategory::VeryUnhealthy,
            Some(_) => AqiCategory::Hazardous,
        }
    }

    /// The human readable label, e.g. `"Unhealthy for Sensitive Groups"`.
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
            AqiCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, AqiCategory::Good),
            (50, AqiCategory::Good),
            (51, AqiCategory::Moderate),
            (100, AqiCategory::Moderate),
            (101, AqiCategory::UnhealthyForSensitiveGroups),
            (150, AqiCategory::UnhealthyForSensitiveGroups),
            (151, AqiCategory::Unhealthy),
            (200, AqiCategory::Unhealthy),
            (201, AqiCategory::VeryUnhealthy),
            (300, AqiCategory::VeryUnhealthy),
            (301, AqiCategory::Hazardous),
            (500, AqiCategory::Hazardous),
            (999, AqiCategory::Hazardous),
        ];
        for (aqi, expected) in cases {
            assert_eq!(AqiCategory::from_aqi(Some(aqi)), expected, "aqi {}", aqi);
        }
    }

    #[test]
    fn test_missing_is_unknown() {
        assert_eq!(AqiCategory::from_aqi(None), AqiCategory::Unknown);
        assert_eq!(AqiCategory::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.label(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(AqiCategory::VeryUnhealthy.to_string(), "Very Unhealthy");
    }
}
