//! Vector averaging of wind directions.

use crate::aggregation::temporal::mean_of_present;
use crate::types::observation::EnrichedObservation;
use crate::types::pollutant::Pollutant;
use serde::Serialize;
use std::collections::BTreeMap;

/// Below this mean resultant length the directions are treated as cancelling out.
pub const RESULTANT_EPSILON: f64 = 1e-9;

/// Mean direction of a set of angles in degrees, normalized into [0, 360).
///
/// Each angle is turned into a unit vector; the mean direction is the angle of the mean
/// vector. Missing and non-finite angles are skipped. Returns `None` for an empty input and
/// for inputs whose vectors cancel (mean resultant length below [`RESULTANT_EPSILON`]),
/// where no direction is defined.
///
/// # Examples
///
/// ```rust
/// use airq::circular_mean;
///
/// let mean = circular_mean([350.0, 10.0]).unwrap();
/// assert!(mean < 1e-9 || 360.0 - mean < 1e-9);
///
/// assert_eq!(circular_mean([0.0, 90.0, 180.0, 270.0]), None);
/// let east = circular_mean([Some(90.0_f64), None]).unwrap();
/// assert!((east - 90.0).abs() < 1e-9);
/// ```
pub fn circular_mean<I>(angles: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    let (mut sin_sum, mut cos_sum, mut count) = (0.0, 0.0, 0usize);
    for angle in angles {
        let Some(degrees) = angle.into().filter(|d| d.is_finite()) else {
            continue;
        };
        let radians = degrees.to_radians();
        sin_sum += radians.sin();
        cos_sum += radians.cos();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let mean_sin = sin_sum / count as f64;
    let mean_cos = cos_sum / count as f64;
    if mean_sin.hypot(mean_cos) < RESULTANT_EPSILON {
        return None;
    }
    let degrees = mean_sin.atan2(mean_cos).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative angles
    Some(if degrees >= 360.0 { 0.0 } else { degrees })
}

/// Wind and pollutant summary for one hour of the day across a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyWindProfile {
    pub hour: u32,
    /// Circular mean of the wind angles observed at this hour.
    pub mean_direction: Option<f64>,
    /// Arithmetic mean concentration per pollutant, in [`Pollutant::ALL`] order.
    pub pollutant_means: [Option<f64>; 6],
}

impl HourlyWindProfile {
    pub fn pollutant_mean(&self, pollutant: Pollutant) -> Option<f64> {
        self.pollutant_means[pollutant.index()]
    }
}

/// Groups rows by hour of day and summarizes wind direction and pollutants per hour.
/// Hours without rows are absent from the result, which is sorted by hour.
pub fn wind_profile_by_hour(rows: &[EnrichedObservation]) -> Vec<HourlyWindProfile> {
    let mut by_hour: BTreeMap<u32, Vec<&EnrichedObservation>> = BTreeMap::new();
    for row in rows {
        by_hour.entry(row.hour()).or_default().push(row);
    }
    by_hour
        .into_iter()
        .map(|(hour, group)| HourlyWindProfile {
            hour,
            mean_direction: circular_mean(group.iter().map(|r| r.wind_degrees)),
            pollutant_means: Pollutant::ALL
                .map(|p| mean_of_present(group.iter().map(|r| r.concentrations.get(p)))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::aqi_category::AqiCategory;
    use crate::types::observation::{Concentrations, Meteorology, SubIndices};
    use chrono::NaiveDate;

    fn angle_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    fn row(hour: u32, day: u32, wind: Option<f64>, pm25: Option<f64>) -> EnrichedObservation {
        EnrichedObservation {
            datetime: NaiveDate::from_ymd_opt(2016, 1, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            concentrations: Concentrations {
                pm25,
                ..Default::default()
            },
            meteorology: Meteorology::default(),
            wind_direction: None,
            wind_degrees: wind,
            sub_indices: SubIndices::default(),
            aqi: None,
            category: AqiCategory::Unknown,
        }
    }

    #[test]
    fn test_wraparound_mean_is_north() {
        let mean = circular_mean([350.0, 10.0]).unwrap();
        assert!(angle_distance(mean, 0.0) < 1e-9, "got {}", mean);
        assert!((0.0..360.0).contains(&mean));
    }

    #[test]
    fn test_cancelling_directions_are_undefined() {
        assert_eq!(circular_mean([0.0, 90.0, 180.0, 270.0]), None);
        assert_eq!(circular_mean([45.0, 225.0]), None);
    }

    #[test]
    fn test_empty_and_all_missing() {
        assert_eq!(circular_mean(Vec::<f64>::new()), None);
        assert_eq!(circular_mean([None::<f64>, None]), None);
        assert_eq!(circular_mean([f64::NAN]), None);
    }

    #[test]
    fn test_simple_means() {
        assert!((circular_mean([0.0, 90.0]).unwrap() - 45.0).abs() < 1e-9);
        assert!((circular_mean([270.0]).unwrap() - 270.0).abs() < 1e-9);
        let mean = circular_mean([Some(200.0_f64), None, Some(220.0)]).unwrap();
        assert!((mean - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_wind_profile_by_hour() {
        let rows = vec![
            row(3, 1, Some(350.0), Some(10.0)),
            row(3, 2, Some(10.0), None),
            row(3, 3, None, Some(20.0)),
            row(5, 1, Some(90.0), Some(5.0)),
        ];
        let profile = wind_profile_by_hour(&rows);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile[0].hour, 3);
        assert!(angle_distance(profile[0].mean_direction.unwrap(), 0.0) < 1e-9);
        assert_eq!(profile[0].pollutant_mean(Pollutant::Pm25), Some(15.0));
        assert_eq!(profile[0].pollutant_mean(Pollutant::O3), None);
        assert_eq!(profile[1].hour, 5);
        assert!((profile[1].mean_direction.unwrap() - 90.0).abs() < 1e-9);
    }
}
