//! Per-day headline figures: extremes and means of each pollutant and of the AQI.

use crate::aggregation::temporal::mean_of_present;
use crate::pipeline::EnrichedDataset;
use crate::types::aqi_category::AqiCategory;
use crate::types::observation::EnrichedObservation;
use crate::types::pollutant::Pollutant;
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantSummary {
    pub pollutant: Pollutant,
    pub max: f64,
    /// Hour of the first occurrence of the maximum.
    pub max_hour: u32,
    pub min: f64,
    /// Hour of the first occurrence of the minimum.
    pub min_hour: u32,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiSummary {
    pub max: u32,
    pub mean: f64,
    /// Category of the maximum.
    pub category: AqiCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Pollutants with at least one value that day, in [`Pollutant::ALL`] order.
    pub pollutants: Vec<PollutantSummary>,
    /// Pollutants without any value that day.
    pub without_data: Vec<Pollutant>,
    pub aqi: Option<AqiSummary>,
}

impl DailySummary {
    pub fn pollutant(&self, pollutant: Pollutant) -> Option<&PollutantSummary> {
        self.pollutants.iter().find(|s| s.pollutant == pollutant)
    }
}

/// Summarizes one pollutant over `rows`, `None` if it has no value there.
pub fn summarize_pollutant(
    rows: &[EnrichedObservation],
    pollutant: Pollutant,
) -> Option<PollutantSummary> {
    let values: Vec<(u32, f64)> = rows
        .iter()
        .filter_map(|r| {
            r.concentrations
                .get(pollutant)
                .filter(|v| v.is_finite())
                .map(|v| (r.hour(), v))
        })
        .collect();
    let (max_hour, max) = *values.iter().min_by_key(|(_, v)| Reverse(OrderedFloat(*v)))?;
    let (min_hour, min) = *values.iter().min_by_key(|(_, v)| OrderedFloat(*v))?;
    let mean = mean_of_present(values.iter().map(|(_, v)| Some(*v)))?;
    Some(PollutantSummary {
        pollutant,
        max,
        max_hour,
        min,
        min_hour,
        mean,
    })
}

/// Summarizes the AQI over `rows`, `None` if no row has an AQI.
pub fn summarize_aqi(rows: &[EnrichedObservation]) -> Option<AqiSummary> {
    let max = rows.iter().filter_map(|r| r.aqi).max()?;
    let mean = mean_of_present(rows.iter().map(|r| r.aqi.map(f64::from)))?;
    Some(AqiSummary {
        max,
        mean,
        category: AqiCategory::from_aqi(Some(max)),
    })
}

/// Headline figures for one calendar day of `dataset`.
pub fn daily_summary(dataset: &EnrichedDataset, date: NaiveDate) -> DailySummary {
    let rows = dataset.for_date(date);
    let mut pollutants = Vec::new();
    let mut without_data = Vec::new();
    for pollutant in Pollutant::ALL {
        match summarize_pollutant(rows, pollutant) {
            Some(summary) => pollutants.push(summary),
            None => without_data.push(pollutant),
        }
    }
    DailySummary {
        date,
        pollutants,
        without_data,
        aqi: summarize_aqi(rows),
    }
}
