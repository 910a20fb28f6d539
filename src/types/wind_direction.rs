//! Defines the `WindDirection` enum, mapping the 16-point compass labels found in the
//! `wd` column of station records to angles in degrees.

use serde::Serialize;
use std::fmt;

/// Width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

/// A point on the 16-point compass rose.
///
/// Each variant's discriminant is its sector number counted clockwise from north, so the
/// angle is `discriminant * 22.5°`. Use [`WindDirection::from_label`] to parse the labels
/// reported by a station and [`WindDirection::from_degrees`] to go back from an angle to
/// the nearest label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindDirection {
    /// 0°
    N = 0,
    /// 22.5°
    NNE = 1,
    /// 45°
    NE = 2,
    /// 67.5°
    ENE = 3,
    /// 90°
    E = 4,
    /// 112.5°
    ESE = 5,
    /// 135°
    SE = 6,
    /// 157.5°
    SSE = 7,
    /// 180°
    S = 8,
    /// 202.5°
    SSW = 9,
    /// 225°
    SW = 10,
    /// 247.5°
    WSW = 11,
    /// 270°
    W = 12,
    /// 292.5°
    WNW = 13,
    /// 315°
    NW = 14,
    /// 337.5°
    NNW = 15,
}

impl WindDirection {
    /// All sixteen points, clockwise from north.
    pub const ALL: [WindDirection; 16] = [
        WindDirection::N,
        WindDirection::NNE,
        WindDirection::NE,
        WindDirection::ENE,
        WindDirection::E,
        WindDirection::ESE,
        WindDirection::SE,
        WindDirection::SSE,
        WindDirection::S,
        WindDirection::SSW,
        WindDirection::SW,
        WindDirection::WSW,
        WindDirection::W,
        WindDirection::WNW,
        WindDirection::NW,
        WindDirection::NNW,
    ];

    /// Attempts to convert a compass label into a `WindDirection`.
    ///
    /// Matching is exact and case-sensitive, like the labels written by the station
    /// (`"N"`, `"NNE"`, ...). Anything else yields `None`; the pipeline treats that as a
    /// missing angle and lets interpolation repair it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use airq::WindDirection;
    ///
    /// assert_eq!(WindDirection::from_label("ESE"), Some(WindDirection::ESE));
    /// assert_eq!(WindDirection::from_label("north"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "N" => Some(WindDirection::N),
            "NNE" => Some(WindDirection::NNE),
            "NE" => Some(WindDirection::NE),
            "ENE" => Some(WindDirection::ENE),
            "E" => Some(WindDirection::E),
            "ESE" => Some(WindDirection::ESE),
            "SE" => Some(WindDirection::SE),
            "SSE" => Some(WindDirection::SSE),
            "S" => Some(WindDirection::S),
            "SSW" => Some(WindDirection::SSW),
            "SW" => Some(WindDirection::SW),
            "WSW" => Some(WindDirection::WSW),
            "W" => Some(WindDirection::W),
            "WNW" => Some(WindDirection::WNW),
            "NW" => Some(WindDirection::NW),
            "NNW" => Some(WindDirection::NNW),
            _ => None,
        }
    }

    /// Returns the compass point closest to `degrees`.
    ///
    /// The angle is normalized into [0, 360) first, so `-10.0` resolves to `N` and
    /// `355.0` to `N` as well. Non-finite input yields `None`.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let normalized = degrees.rem_euclid(360.0);
        let sector = (normalized / SECTOR_DEGREES).round() as usize % Self::ALL.len();
        Some(Self::ALL[sector])
    }

    /// The angle of this compass point in degrees, in [0, 360).
    pub fn degrees(self) -> f64 {
        self as u8 as f64 * SECTOR_DEGREES
    }

    /// The abbreviated label, e.g. `"NNE"`.
    pub fn label(self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NNE => "NNE",
            WindDirection::NE => "NE",
            WindDirection::ENE => "ENE",
            WindDirection::E => "E",
            WindDirection::ESE => "ESE",
            WindDirection::SE => "SE",
            WindDirection::SSE => "SSE",
            WindDirection::S => "S",
            WindDirection::SSW => "SSW",
            WindDirection::SW => "SW",
            WindDirection::WSW => "WSW",
            WindDirection::W => "W",
            WindDirection::WNW => "WNW",
            WindDirection::NW => "NW",
            WindDirection::NNW => "NNW",
        }
    }

    /// The spelled-out name, e.g. `"North-Northeast"`.
    pub fn full_name(self) -> &'static str {
        match self {
            WindDirection::N => "North",
            WindDirection::NNE => "North-Northeast",
            WindDirection::NE => "Northeast",
            WindDirection::ENE => "East-Northeast",
            WindDirection::E => "East",
            WindDirection::ESE => "East-Southeast",
            WindDirection::SE => "Southeast",
            WindDirection::SSE => "South-Southeast",
            WindDirection::S => "South",
            WindDirection::SSW => "South-Southwest",
            WindDirection::SW => "Southwest",
            WindDirection::WSW => "West-Southwest",
            WindDirection::W => "West",
            WindDirection::WNW => "West-Northwest",
            WindDirection::NW => "Northwest",
            WindDirection::NNW => "North-Northwest",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps an optional compass label to degrees. Unknown labels become `None`.
pub fn encode_label(label: Option<&str>) -> Option<f64> {
    label
        .and_then(WindDirection::from_label)
        .map(WindDirection::degrees)
}
