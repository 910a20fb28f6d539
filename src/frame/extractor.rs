//! Reads station records out of a polars `DataFrame` laid out like the station CSV export.

use crate::frame::error::FrameError;
use crate::types::field::Field;
use crate::types::observation::Observation;
use crate::types::pollutant::Pollutant;
use chrono::NaiveDate;
use polars::prelude::*;

const COL_YEAR: &str = "year";
const COL_MONTH: &str = "month";
const COL_DAY: &str = "day";
const COL_HOUR: &str = "hour";
const COL_WD: &str = "wd"; // Compass label

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, col: &str) -> Result<&'a Column, FrameError> {
    df.column(col)
        .map_err(|e| FrameError::ColumnNotFound(col.to_string(), e))
}

/// Reads a column as floats, casting integer columns. Nulls become `None`.
fn float_values(df: &DataFrame, col: &str) -> Result<Vec<Option<f64>>, FrameError> {
    let cast = get_column(df, col)?
        .cast(&DataType::Float64)
        .map_err(|source| FrameError::ColumnType {
            column: col.to_string(),
            expected: "Float64",
            source,
        })?;
    let values = cast.f64().map_err(|source| FrameError::ColumnType {
        column: col.to_string(),
        expected: "Float64",
        source,
    })?;
    Ok(values.into_iter().collect())
}

fn int_values(df: &DataFrame, col: &str) -> Result<Vec<Option<i64>>, FrameError> {
    let cast = get_column(df, col)?
        .cast(&DataType::Int64)
        .map_err(|source| FrameError::ColumnType {
            column: col.to_string(),
            expected: "Int64",
            source,
        })?;
    let values = cast.i64().map_err(|source| FrameError::ColumnType {
        column: col.to_string(),
        expected: "Int64",
        source,
    })?;
    Ok(values.into_iter().collect())
}

fn label_values(df: &DataFrame, col: &str) -> Result<Vec<Option<String>>, FrameError> {
    let values = get_column(df, col)?
        .str()
        .map_err(|source| FrameError::ColumnType {
            column: col.to_string(),
            expected: "String",
            source,
        })?;
    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn timestamp_part(
    values: &[Option<i64>],
    row: usize,
    column: &'static str,
) -> Result<i64, FrameError> {
    values[row].ok_or(FrameError::MissingTimestampPart { row, column })
}

/// Converts a frame with the station schema into observations.
///
/// Expected columns: `year`, `month`, `day`, `hour`, the six pollutant columns
/// (`PM2.5`, `PM10`, `SO2`, `NO2`, `CO`, `O3`), `TEMP`, `PRES`, `DEWP`, `RAIN`, `WSPM` and
/// the compass label column `wd`. Extra columns (such as a station name) are ignored.
///
/// # Errors
///
/// Returns [`FrameError::ColumnNotFound`] for a missing column, [`FrameError::ColumnType`]
/// for a column that cannot be read as numbers (or strings, for `wd`), and
/// [`FrameError::MissingTimestampPart`] / [`FrameError::InvalidTimestamp`] for rows whose
/// date and hour do not form a valid instant.
pub fn observations_from_frame(df: &DataFrame) -> Result<Vec<Observation>, FrameError> {
    let years = int_values(df, COL_YEAR)?;
    let months = int_values(df, COL_MONTH)?;
    let days = int_values(df, COL_DAY)?;
    let hours = int_values(df, COL_HOUR)?;

    let pollutants = Pollutant::ALL
        .iter()
        .map(|p| float_values(df, p.column_name()))
        .collect::<Result<Vec<_>, _>>()?;
    let temperature = float_values(df, Field::Temperature.column_name())?;
    let pressure = float_values(df, Field::Pressure.column_name())?;
    let dew_point = float_values(df, Field::DewPoint.column_name())?;
    let rain = float_values(df, Field::Rain.column_name())?;
    let wind_speed = float_values(df, Field::WindSpeed.column_name())?;
    let labels = label_values(df, COL_WD)?;

    let mut observations = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let year = timestamp_part(&years, row, COL_YEAR)?;
        let month = timestamp_part(&months, row, COL_MONTH)?;
        let day = timestamp_part(&days, row, COL_DAY)?;
        let hour = timestamp_part(&hours, row, COL_HOUR)?;
        let invalid = || FrameError::InvalidTimestamp {
            row,
            year,
            month,
            day,
            hour,
        };
        let datetime = NaiveDate::from_ymd_opt(
            i32::try_from(year).map_err(|_| invalid())?,
            u32::try_from(month).map_err(|_| invalid())?,
            u32::try_from(day).map_err(|_| invalid())?,
        )
        .and_then(|date| date.and_hms_opt(u32::try_from(hour).ok()?, 0, 0))
        .ok_or_else(invalid)?;

        let mut observation = Observation {
            datetime,
            wind_direction: labels[row].clone(),
            ..Default::default()
        };
        for (pollutant, values) in Pollutant::ALL.iter().zip(&pollutants) {
            observation.concentrations.set(*pollutant, values[row]);
        }
        observation.meteorology.temperature = temperature[row];
        observation.meteorology.pressure = pressure[row];
        observation.meteorology.dew_point = dew_point[row];
        observation.meteorology.rain = rain[row];
        observation.meteorology.wind_speed = wind_speed[row];
        observations.push(observation);
    }
    Ok(observations)
}
