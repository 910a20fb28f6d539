//! Conversion of pipeline outputs into polars `DataFrame`s.

use crate::aggregation::temporal::{GroupKey, GroupValue, GroupedMeans};
use crate::frame::enriched_frame::EnrichedLazyFrame;
use crate::frame::error::FrameError;
use crate::pipeline::EnrichedDataset;
use crate::types::field::Field;
use crate::types::pollutant::Pollutant;
use polars::prelude::*;

pub const COL_DATETIME: &str = "datetime";
pub const COL_WIND_LABEL: &str = "wd";
pub const COL_CATEGORY: &str = "AQI_Category";
pub const COL_ROWS: &str = "rows";

/// Numeric columns of the enriched frame, in output order.
const NUMERIC_FIELDS: [Field; 12] = [
    Field::Pollutant(Pollutant::Pm25),
    Field::Pollutant(Pollutant::Pm10),
    Field::Pollutant(Pollutant::So2),
    Field::Pollutant(Pollutant::No2),
    Field::Pollutant(Pollutant::Co),
    Field::Pollutant(Pollutant::O3),
    Field::Temperature,
    Field::Pressure,
    Field::DewPoint,
    Field::Rain,
    Field::WindSpeed,
    Field::WindDegrees,
];

impl EnrichedDataset {
    /// Materializes the rows as a `DataFrame`.
    ///
    /// Columns: `datetime` (millisecond precision), the numeric measurement columns under
    /// their station names, `wd` (original label), `wd_deg`, one `AQI_<pollutant>` column
    /// per sub-index, `AQI` and `AQI_Category`.
    pub fn to_dataframe(&self) -> Result<DataFrame, FrameError> {
        let rows = self.rows();
        let datetimes = DatetimeChunked::from_naive_datetime(
            COL_DATETIME.into(),
            rows.iter().map(|r| r.datetime),
            TimeUnit::Milliseconds,
        );

        let mut columns = Vec::with_capacity(NUMERIC_FIELDS.len() + Pollutant::ALL.len() + 4);
        columns.push(Column::from(datetimes.into_series()));
        for field in NUMERIC_FIELDS {
            let values: Vec<Option<f64>> = rows.iter().map(|r| r.value(field)).collect();
            columns.push(Column::new(field.column_name().into(), values));
        }
        let labels: Vec<Option<&str>> =
            rows.iter().map(|r| r.wind_direction.as_deref()).collect();
        columns.push(Column::new(COL_WIND_LABEL.into(), labels));
        for pollutant in Pollutant::ALL {
            let values: Vec<Option<u32>> =
                rows.iter().map(|r| r.sub_indices.get(pollutant)).collect();
            columns.push(Column::new(pollutant.sub_index_column().into(), values));
        }
        let aqi: Vec<Option<u32>> = rows.iter().map(|r| r.aqi).collect();
        columns.push(Column::new(Field::Aqi.column_name().into(), aqi));
        let categories: Vec<&str> = rows.iter().map(|r| r.category.label()).collect();
        columns.push(Column::new(COL_CATEGORY.into(), categories));

        Ok(DataFrame::new(columns)?)
    }

    /// Wraps [`EnrichedDataset::to_dataframe`] in an [`EnrichedLazyFrame`].
    pub fn to_lazy(&self) -> Result<EnrichedLazyFrame, FrameError> {
        Ok(EnrichedLazyFrame::new(self.to_dataframe()?.lazy()))
    }
}

impl GroupKey {
    pub fn column_name(self) -> &'static str {
        match self {
            GroupKey::YearMonth => "year_month",
            GroupKey::Month => "month",
            GroupKey::Hour => "hour",
            GroupKey::Date => "date",
        }
    }
}

impl GroupedMeans {
    /// One row per group: the key column, the group's row count, then one mean column per field.
    ///
    /// Month-of-year and hour keys are written as integers, year+month and date keys as
    /// `YYYY-MM` / `YYYY-MM-DD` text.
    pub fn to_dataframe(&self) -> Result<DataFrame, FrameError> {
        let name: PlSmallStr = self.key.column_name().into();
        let key_column = match self.key {
            GroupKey::Month | GroupKey::Hour => {
                let values: Vec<Option<u32>> = self
                    .groups
                    .iter()
                    .map(|g| match g.key {
                        GroupValue::Month(value) | GroupValue::Hour(value) => Some(value),
                        _ => None,
                    })
                    .collect();
                Column::new(name, values)
            }
            GroupKey::YearMonth | GroupKey::Date => {
                let keys: Vec<String> = self.groups.iter().map(|g| g.key.to_string()).collect();
                Column::new(name, keys)
            }
        };

        let mut columns = Vec::with_capacity(self.fields.len() + 2);
        columns.push(key_column);
        let counts: Vec<u64> = self.groups.iter().map(|g| g.rows as u64).collect();
        columns.push(Column::new(COL_ROWS.into(), counts));
        for (index, field) in self.fields.iter().enumerate() {
            let means: Vec<Option<f64>> = self.groups.iter().map(|g| g.means[index]).collect();
            columns.push(Column::new(field.column_name().into(), means));
        }
        Ok(DataFrame::new(columns)?)
    }
}
