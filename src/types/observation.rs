// observation.rs

//! Raw and enriched hourly station records.

use crate::types::aqi_category::AqiCategory;
use crate::types::field::Field;
use crate::types::pollutant::Pollutant;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Pollutant concentrations of one hourly record. `None` marks a missing reading.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct Concentrations {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub so2: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub o3: Option<f64>,
}

impl Concentrations {
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
        }
    }

    pub fn set(&mut self, pollutant: Pollutant, value: Option<f64>) {
        let slot = match pollutant {
            Pollutant::Pm25 => &mut self.pm25,
            Pollutant::Pm10 => &mut self.pm10,
            Pollutant::So2 => &mut self.so2,
            Pollutant::No2 => &mut self.no2,
            Pollutant::Co => &mut self.co,
            Pollutant::O3 => &mut self.o3,
        };
        *slot = value;
    }
}

/// Meteorological readings of one hourly record.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize)]
pub struct Meteorology {
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Pressure in hPa.
    pub pressure: Option<f64>,
    /// Dew point in °C.
    pub dew_point: Option<f64>,
    /// Rainfall in mm.
    pub rain: Option<f64>,
    /// Wind speed in m/s.
    pub wind_speed: Option<f64>,
}

/// One hourly record as delivered by the loader.
#[derive(Debug, Default, PartialEq, Clone, Serialize)]
pub struct Observation {
    pub datetime: NaiveDateTime,
    pub concentrations: Concentrations,
    pub meteorology: Meteorology,
    /// 16-point compass label, e.g. `"NNE"`.
    pub wind_direction: Option<String>,
}

impl Observation {
    /// Creates an empty observation for the given hour. Returns `None` for an invalid date or hour.
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<Self> {
        let datetime = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)?;
        Some(Self {
            datetime,
            ..Default::default()
        })
    }

    pub fn with_concentration(mut self, pollutant: Pollutant, value: f64) -> Self {
        self.concentrations.set(pollutant, Some(value));
        self
    }

    pub fn with_wind_direction(mut self, label: &str) -> Self {
        self.wind_direction = Some(label.to_string());
        self
    }
}

/// Sub-index per pollutant, indexed in [`Pollutant::ALL`] order.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct SubIndices(pub [Option<u32>; 6]);

impl SubIndices {
    pub fn get(&self, pollutant: Pollutant) -> Option<u32> {
        self.0[pollutant.index()]
    }

    pub fn set(&mut self, pollutant: Pollutant, value: Option<u32>) {
        self.0[pollutant.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, Option<u32>)> + '_ {
        Pollutant::ALL.iter().map(|p| (*p, self.get(*p)))
    }
}

/// A record after the pipeline ran: gaps filled, wind encoded, AQI derived.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct EnrichedObservation {
    pub datetime: NaiveDateTime,
    pub concentrations: Concentrations,
    pub meteorology: Meteorology,
    /// The label as reported, unknown labels included.
    pub wind_direction: Option<String>,
    /// Encoded and interpolated wind angle in [0, 360).
    pub wind_degrees: Option<f64>,
    pub sub_indices: SubIndices,
    pub aqi: Option<u32>,
    pub category: AqiCategory,
}

impl EnrichedObservation {
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    /// Reads a numeric column of this record.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Pollutant(pollutant) => self.concentrations.get(pollutant),
            Field::Temperature => self.meteorology.temperature,
            Field::Pressure => self.meteorology.pressure,
            Field::DewPoint => self.meteorology.dew_point,
            Field::Rain => self.meteorology.rain,
            Field::WindSpeed => self.meteorology.wind_speed,
            Field::WindDegrees => self.wind_degrees,
            Field::SubIndex(pollutant) => self.sub_indices.get(pollutant).map(f64::from),
            Field::Aqi => self.aqi.map(f64::from),
        }
    }

    /// Writes a measured column. Derived index columns are not writable and are ignored.
    pub(crate) fn set_value(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Pollutant(pollutant) => self.concentrations.set(pollutant, value),
            Field::Temperature => self.meteorology.temperature = value,
            Field::Pressure => self.meteorology.pressure = value,
            Field::DewPoint => self.meteorology.dew_point = value,
            Field::Rain => self.meteorology.rain = value,
            Field::WindSpeed => self.meteorology.wind_speed = value,
            Field::WindDegrees => self.wind_degrees = value,
            Field::SubIndex(_) | Field::Aqi => {}
        }
    }
}
