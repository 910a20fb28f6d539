//! Names the numeric columns of an enriched record so that aggregations and
//! imputation can address them generically.

use crate::types::pollutant::Pollutant;
use serde::Serialize;
use std::fmt;

/// A numeric column of an [`crate::EnrichedObservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Pollutant(Pollutant),
    Temperature,
    Pressure,
    DewPoint,
    Rain,
    WindSpeed,
    WindDegrees,
    SubIndex(Pollutant),
    Aqi,
}

impl Field {
    /// The six pollutant concentration columns.
    pub const POLLUTANTS: [Field; 6] = [
        Field::Pollutant(Pollutant::Pm25),
        Field::Pollutant(Pollutant::Pm10),
        Field::Pollutant(Pollutant::So2),
        Field::Pollutant(Pollutant::No2),
        Field::Pollutant(Pollutant::Co),
        Field::Pollutant(Pollutant::O3),
    ];

    /// The meteorological columns correlated against pollutants.
    pub const METEOROLOGY: [Field; 3] = [Field::Temperature, Field::DewPoint, Field::WindSpeed];

    /// Every column the imputation stage fills, in processing order.
    pub const IMPUTED: [Field; 12] = [
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

    pub fn column_name(self) -> &'static str {
        match self {
            Field::Pollutant(p) => p.column_name(),
            Field::Temperature => "TEMP",
            Field::Pressure => "PRES",
            Field::DewPoint => "DEWP",
            Field::Rain => "RAIN",
            Field::WindSpeed => "WSPM",
            Field::WindDegrees => "wd_deg",
            Field::SubIndex(p) => p.sub_index_column(),
            Field::Aqi => "AQI",
        }
    }
}

impl From<Pollutant> for Field {
    fn from(pollutant: Pollutant) -> Self {
        Field::Pollutant(pollutant)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
