//! Defines the `Pollutant` enum for the six criteria pollutants tracked by a station.

use serde::Serialize;
use std::fmt;

/// One of the six pollutants that contribute a sub-index to the overall AQI.
///
/// Concentrations are expected in the units the standard breakpoint tables use:
/// µg/m³ for particulates and SO2/NO2/O3 in the source data set, mg/m³ for CO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Pollutant {
    /// Fine particulate matter (diameter ≤ 2.5 µm).
    Pm25,
    /// Coarse particulate matter (diameter ≤ 10 µm).
    Pm10,
    /// Sulphur dioxide.
    So2,
    /// Nitrogen dioxide.
    No2,
    /// Carbon monoxide.
    Co,
    /// Ozone.
    O3,
}

impl Pollutant {
    /// All pollutants in their canonical column order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// Column name used by the source data set ("PM2.5", "SO2", ...).
    pub fn column_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    /// Column name of the derived sub-index ("AQI_PM25", "AQI_SO2", ...).
    pub fn sub_index_column(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "AQI_PM25",
            Pollutant::Pm10 => "AQI_PM10",
            Pollutant::So2 => "AQI_SO2",
            Pollutant::No2 => "AQI_NO2",
            Pollutant::Co => "AQI_CO",
            Pollutant::O3 => "AQI_O3",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, pollutant) in Pollutant::ALL.iter().enumerate() {
            assert_eq!(pollutant.index(), i);
        }
    }

    #[test]
    fn test_display_uses_column_name() {
        assert_eq!(Pollutant::Pm25.to_string(), "PM2.5");
        assert_eq!(Pollutant::O3.sub_index_column(), "AQI_O3");
    }
}
