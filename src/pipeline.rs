//! The enrichment pipeline: encode wind labels, fill gaps, derive AQI values.
//!
//! Each stage is a separate function taking the previous stage's output, so stages can be
//! exercised on their own. [`Pipeline::enrich`] runs them in order:
//!
//! 1. [`encode_stage`]: select and sort rows, map wind labels to degrees.
//! 2. [`impute_stage`]: fill gaps in every numeric column independently.
//! 3. [`index_stage`]: sub-indices, overall AQI and category per row.

use crate::aggregation::circular::{wind_profile_by_hour, HourlyWindProfile};
use crate::aggregation::temporal::{aggregate, GroupKey, GroupedMeans};
use crate::aqi::engine::AqiEngine;
use crate::imputation::{impute_column, InterpolationMethod, LimitDirection};
use crate::types::aqi_category::AqiCategory;
use crate::types::field::Field;
use crate::types::observation::{EnrichedObservation, Observation, SubIndices};
use crate::types::period::YearRange;
use crate::types::wind_direction::encode_label;
use bon::Builder;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use serde::Serialize;

/// Settings for [`Pipeline`].
///
/// # Examples
///
/// ```rust
/// use airq::{InterpolationMethod, PipelineConfig};
///
/// // The station dashboard only looks at 2014-2016.
/// let config = PipelineConfig::builder()
///     .years((2014, 2016))
///     .interpolation(InterpolationMethod::Linear)
///     .build();
/// assert_eq!(config.years().map(|y| y.start), Some(2014));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct PipelineConfig {
    /// How interior gaps are interpolated. Defaults to positional linear interpolation.
    #[builder(default)]
    interpolation: InterpolationMethod,
    /// Which boundary gaps are filled. Defaults to both ends.
    #[builder(default)]
    limit_direction: LimitDirection,
    /// Inclusive year window; rows outside it are dropped before enrichment.
    #[builder(into)]
    years: Option<YearRange>,
    /// Breakpoint tables. Defaults to the standard tables.
    #[builder(default)]
    engine: AqiEngine,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PipelineConfig {
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    pub fn limit_direction(&self) -> LimitDirection {
        self.limit_direction
    }

    pub fn years(&self) -> Option<YearRange> {
        self.years
    }

    pub fn engine(&self) -> &AqiEngine {
        &self.engine
    }
}

/// Data-quality findings collected while enriching.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataQualityReport {
    /// Columns with no value at all; they stay missing after imputation.
    pub all_missing: Vec<Field>,
    /// Rows whose wind label was present but not a known compass point.
    pub unknown_wind_labels: usize,
    /// Rows dropped by the year window.
    pub filtered_out: usize,
}

/// The output of the pipeline: rows sorted by time, read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDataset {
    rows: Vec<EnrichedObservation>,
    quality: DataQualityReport,
}

impl EnrichedDataset {
    pub fn rows(&self) -> &[EnrichedObservation] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<EnrichedObservation> {
        self.rows
    }

    pub fn quality(&self) -> &DataQualityReport {
        &self.quality
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of one calendar day, in time order.
    pub fn for_date(&self, date: NaiveDate) -> &[EnrichedObservation] {
        let start = self.rows.partition_point(|r| r.date() < date);
        let end = self.rows.partition_point(|r| r.date() <= date);
        &self.rows[start..end]
    }

    /// See [`aggregate`].
    pub fn aggregate(&self, key: GroupKey, fields: &[Field]) -> GroupedMeans {
        aggregate(&self.rows, key, fields)
    }

    /// See [`wind_profile_by_hour`].
    pub fn wind_profile_by_hour(&self) -> Vec<HourlyWindProfile> {
        wind_profile_by_hour(&self.rows)
    }
}

/// Runs the enrichment stages with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Encodes, imputes and indexes `observations`.
    ///
    /// Rows are sorted by timestamp first (stable, so duplicates keep their input order).
    /// This never fails: problems surface as missing values and in the
    /// [`DataQualityReport`].
    pub fn enrich<I>(&self, observations: I) -> EnrichedDataset
    where
        I: IntoIterator<Item = Observation>,
    {
        let observations: Vec<Observation> = observations.into_iter().collect();
        info!("Enriching {} observations", observations.len());

        let encoded = encode_stage(observations, self.config.years);
        let imputed = impute_stage(
            encoded.rows,
            self.config.interpolation,
            self.config.limit_direction,
        );
        let rows = index_stage(imputed.rows, &self.config.engine);

        let quality = DataQualityReport {
            all_missing: imputed.all_missing,
            unknown_wind_labels: encoded.unknown_wind_labels,
            filtered_out: encoded.filtered_out,
        };
        info!(
            "Enriched {} rows ({} dropped by year window, {} columns entirely missing)",
            rows.len(),
            quality.filtered_out,
            quality.all_missing.len()
        );
        EnrichedDataset { rows, quality }
    }
}

/// Runs the pipeline with the default configuration.
///
/// # Examples
///
/// ```rust
/// use airq::{enrich, AqiCategory, Observation, Pollutant};
///
/// let observations = vec![
///     Observation::at(2014, 1, 1, 0).unwrap().with_concentration(Pollutant::Pm25, 10.0),
///     Observation::at(2014, 1, 1, 1).unwrap(),
///     Observation::at(2014, 1, 1, 2).unwrap().with_concentration(Pollutant::Pm25, 14.0),
/// ];
/// let enriched = enrich(observations);
/// let middle = &enriched.rows()[1];
/// assert_eq!(middle.concentrations.pm25, Some(12.0));
/// assert_eq!(middle.aqi, Some(50));
/// assert_eq!(middle.category, AqiCategory::Good);
/// ```
pub fn enrich<I>(observations: I) -> EnrichedDataset
where
    I: IntoIterator<Item = Observation>,
{
    Pipeline::default().enrich(observations)
}

/// Output of [`encode_stage`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRows {
    pub rows: Vec<EnrichedObservation>,
    pub unknown_wind_labels: usize,
    pub filtered_out: usize,
}

/// Applies the year window, sorts by time and encodes wind labels into degrees.
/// Derived index columns are left empty.
pub fn encode_stage(observations: Vec<Observation>, years: Option<YearRange>) -> EncodedRows {
    let total = observations.len();
    let mut selected: Vec<Observation> = match years {
        Some(range) => observations
            .into_iter()
            .filter(|o| range.contains(&o.datetime))
            .collect(),
        None => observations,
    };
    let filtered_out = total - selected.len();
    selected.sort_by_key(|o| o.datetime);

    let mut unknown_wind_labels = 0;
    let rows = selected
        .into_iter()
        .map(|o| {
            let wind_degrees = encode_label(o.wind_direction.as_deref());
            if o.wind_direction.is_some() && wind_degrees.is_none() {
                unknown_wind_labels += 1;
            }
            EnrichedObservation {
                datetime: o.datetime,
                concentrations: o.concentrations,
                meteorology: o.meteorology,
                wind_direction: o.wind_direction,
                wind_degrees,
                sub_indices: SubIndices::default(),
                aqi: None,
                category: AqiCategory::Unknown,
            }
        })
        .collect();

    if unknown_wind_labels > 0 {
        warn!(
            "{} wind labels are not compass points and were treated as missing",
            unknown_wind_labels
        );
    }
    EncodedRows {
        rows,
        unknown_wind_labels,
        filtered_out,
    }
}

/// Output of [`impute_stage`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImputedRows {
    pub rows: Vec<EnrichedObservation>,
    pub all_missing: Vec<Field>,
}

/// Fills gaps in every column of [`Field::IMPUTED`], each column on its own.
pub fn impute_stage(
    mut rows: Vec<EnrichedObservation>,
    method: InterpolationMethod,
    direction: LimitDirection,
) -> ImputedRows {
    let datetimes: Vec<NaiveDateTime> = rows.iter().map(|r| r.datetime).collect();
    let mut all_missing = Vec::new();

    for field in Field::IMPUTED {
        let column: Vec<Option<f64>> = rows.iter().map(|r| r.value(field)).collect();
        let gaps = column
            .iter()
            .filter(|v| !v.is_some_and(f64::is_finite))
            .count();
        if gaps == 0 {
            continue;
        }
        let filled = impute_column(&datetimes, &column, method, direction);
        if !rows.is_empty() && filled.iter().all(Option::is_none) {
            warn!("Column {} has no values; left missing", field);
            all_missing.push(field);
        } else {
            debug!("Filled {} gaps in column {}", gaps, field);
        }
        for (row, value) in rows.iter_mut().zip(filled) {
            row.set_value(field, value);
        }
    }
    ImputedRows { rows, all_missing }
}

/// Derives sub-indices, overall AQI and category for each row.
pub fn index_stage(
    mut rows: Vec<EnrichedObservation>,
    engine: &AqiEngine,
) -> Vec<EnrichedObservation> {
    for row in rows.iter_mut() {
        let assessment = engine.assess(&row.concentrations);
        row.sub_indices = assessment.sub_indices;
        row.aqi = assessment.aqi;
        row.category = assessment.category;
    }
    rows
}
