//! Pearson correlation between columns of the enriched dataset.

use crate::aggregation::circular::HourlyWindProfile;
use crate::types::field::Field;
use crate::types::observation::EnrichedObservation;
use crate::types::pollutant::Pollutant;
use serde::Serialize;

/// Pearson correlation over the pairs where both values are present and finite.
///
/// Returns `None` with fewer than two complete pairs or when either side has zero variance.
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    let complete: Vec<(f64, f64)> = pairs
        .into_iter()
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        })
        .collect();
    if complete.len() < 2 {
        return None;
    }
    let n = complete.len() as f64;
    let mean_x = complete.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = complete.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &complete {
        let (dx, dy) = (x - mean_x, y - mean_y);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Correlations of `row_fields` against `column_fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub row_fields: Vec<Field>,
    pub column_fields: Vec<Field>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: Field, column: Field) -> Option<f64> {
        let r = self.row_fields.iter().position(|f| *f == row)?;
        let c = self.column_fields.iter().position(|f| *f == column)?;
        self.values[r][c]
    }
}

pub fn correlation_matrix(
    rows: &[EnrichedObservation],
    row_fields: &[Field],
    column_fields: &[Field],
) -> CorrelationMatrix {
    let values = row_fields
        .iter()
        .map(|row_field| {
            column_fields
                .iter()
                .map(|column_field| {
                    pearson(
                        rows.iter()
                            .map(|r| (r.value(*row_field), r.value(*column_field))),
                    )
                })
                .collect()
        })
        .collect();
    CorrelationMatrix {
        row_fields: row_fields.to_vec(),
        column_fields: column_fields.to_vec(),
        values,
    }
}

/// Meteorology (temperature, dew point, wind speed) against the six pollutants.
pub fn meteorology_correlations(rows: &[EnrichedObservation]) -> CorrelationMatrix {
    correlation_matrix(rows, &Field::METEOROLOGY, &Field::POLLUTANTS)
}

/// Correlation of the hourly mean wind direction with each hourly mean concentration.
pub fn wind_pollutant_correlations(profile: &[HourlyWindProfile]) -> Vec<(Pollutant, Option<f64>)> {
    Pollutant::ALL
        .iter()
        .map(|pollutant| {
            let r = pearson(
                profile
                    .iter()
                    .map(|hour| (hour.mean_direction, hour.pollutant_mean(*pollutant))),
            );
            (*pollutant, r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich;
    use crate::types::observation::Observation;

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let r = pearson([(Some(1.0), Some(2.0)), (Some(2.0), Some(4.0)), (Some(3.0), Some(6.0))]);
        assert!((r.unwrap() - 1.0).abs() < 1e-12);
        let r = pearson([(Some(1.0), Some(3.0)), (Some(2.0), Some(2.0)), (Some(3.0), Some(1.0))]);
        assert!((r.unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_skips_incomplete_pairs() {
        let r = pearson([
            (Some(1.0), Some(1.0)),
            (None, Some(100.0)),
            (Some(2.0), Some(2.0)),
            (Some(50.0), None),
            (Some(3.0), Some(3.0)),
        ]);
        assert!((r.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pearson_undefined_cases() {
        assert_eq!(pearson([(Some(1.0), Some(1.0))]), None);
        assert_eq!(pearson([(Some(1.0), Some(5.0)), (Some(2.0), Some(5.0))]), None);
        assert_eq!(pearson(Vec::new()), None);
    }

    #[test]
    fn test_meteorology_matrix_shape_and_values() {
        let observations: Vec<Observation> = (0..4)
            .map(|hour| {
                let mut obs = Observation::at(2016, 2, 1, hour)
                    .unwrap()
                    .with_concentration(Pollutant::No2, 10.0 * hour as f64);
                obs.meteorology.temperature = Some(-(hour as f64));
                obs
            })
            .collect();
        let dataset = enrich(observations);
        let matrix = meteorology_correlations(dataset.rows());
        assert_eq!(matrix.values.len(), 3);
        assert_eq!(matrix.values[0].len(), 6);
        let r = matrix
            .get(Field::Temperature, Field::Pollutant(Pollutant::No2))
            .unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        assert_eq!(matrix.get(Field::WindSpeed, Field::Pollutant(Pollutant::No2)), None);
    }

    #[test]
    fn test_wind_pollutant_correlations() {
        let profile: Vec<HourlyWindProfile> = (0..3)
            .map(|hour| HourlyWindProfile {
                hour,
                mean_direction: Some(90.0 * hour as f64),
                pollutant_means: [Some(hour as f64), None, None, None, None, None],
            })
            .collect();
        let result = wind_pollutant_correlations(&profile);
        assert_eq!(result[0].0, Pollutant::Pm25);
        assert!((result[0].1.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(result[1], (Pollutant::Pm10, None));
    }
}
