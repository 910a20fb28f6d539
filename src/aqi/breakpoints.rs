//! Piecewise-linear breakpoint tables mapping pollutant concentrations to index values.
//!
//! The standard tables are the 24-hour index breakpoints used by the station's reporting.
//! They are gapped: a concentration between two entries (e.g. PM2.5 of 12.05) belongs to
//! no interval and yields no sub-index.

use crate::aqi::error::BreakpointError;
use crate::types::pollutant::Pollutant;
use std::sync::LazyLock;

/// One interval of a breakpoint table: concentrations in `[c_lo, c_hi]` map linearly onto
/// index values in `[i_lo, i_hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub c_lo: f64,
    pub c_hi: f64,
    pub i_lo: u32,
    pub i_hi: u32,
}

impl Breakpoint {
    pub const fn new(c_lo: f64, c_hi: f64, i_lo: u32, i_hi: u32) -> Self {
        Self {
            c_lo,
            c_hi,
            i_lo,
            i_hi,
        }
    }

    pub fn contains(&self, concentration: f64) -> bool {
        self.c_lo <= concentration && concentration <= self.c_hi
    }

    /// Linear interpolation inside the interval, before rounding.
    pub fn interpolate(&self, concentration: f64) -> f64 {
        let slope = f64::from(self.i_hi - self.i_lo) / (self.c_hi - self.c_lo);
        slope * (concentration - self.c_lo) + f64::from(self.i_lo)
    }
}

const PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 500.4, 301, 500),
];

const PM10: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 604.0, 301, 500),
];

const SO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 35.0, 0, 50),
    Breakpoint::new(36.0, 75.0, 51, 100),
    Breakpoint::new(76.0, 185.0, 101, 150),
    Breakpoint::new(186.0, 304.0, 151, 200),
    Breakpoint::new(305.0, 604.0, 201, 300),
    Breakpoint::new(605.0, 1004.0, 301, 500),
];

const NO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 53.0, 0, 50),
    Breakpoint::new(54.0, 100.0, 51, 100),
    Breakpoint::new(101.0, 360.0, 101, 150),
    Breakpoint::new(361.0, 649.0, 151, 200),
    Breakpoint::new(650.0, 1249.0, 201, 300),
    Breakpoint::new(1250.0, 2049.0, 301, 500),
];

const CO: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 4.4, 0, 50),
    Breakpoint::new(4.5, 9.4, 51, 100),
    Breakpoint::new(9.5, 12.4, 101, 150),
    Breakpoint::new(12.5, 15.4, 151, 200),
    Breakpoint::new(15.5, 30.4, 201, 300),
    Breakpoint::new(30.5, 50.4, 301, 500),
];

const O3: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 70.0, 51, 100),
    Breakpoint::new(71.0, 85.0, 101, 150),
    Breakpoint::new(86.0, 105.0, 151, 200),
    Breakpoint::new(106.0, 200.0, 201, 300),
    Breakpoint::new(201.0, 404.0, 301, 500),
];

static STANDARD_TABLES: LazyLock<[BreakpointTable; 6]> = LazyLock::new(|| {
    Pollutant::ALL.map(|pollutant| {
        BreakpointTable::new(standard_entries(pollutant).to_vec())
            .expect("standard breakpoint tables are well formed")
    })
});

fn standard_entries(pollutant: Pollutant) -> &'static [Breakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25,
        Pollutant::Pm10 => &PM10,
        Pollutant::So2 => &SO2,
        Pollutant::No2 => &NO2,
        Pollutant::Co => &CO,
        Pollutant::O3 => &O3,
    }
}

/// A validated, immutable breakpoint table for one pollutant.
///
/// Entries are sorted ascending by `c_lo`, have `c_hi > c_lo` and `i_hi >= i_lo`, and do
/// not overlap. Gaps between entries are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validates `entries` and builds a table from them.
    ///
    /// # Errors
    ///
    /// Returns a [`BreakpointError`] describing the first malformed entry. This is the only
    /// hard failure in the AQI engine; lookups against a built table never fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use airq::{Breakpoint, BreakpointTable};
    ///
    /// let table = BreakpointTable::new(vec![
    ///     Breakpoint::new(0.0, 9.0, 0, 50),
    ///     Breakpoint::new(9.1, 35.4, 51, 100),
    /// ]);
    /// assert!(table.is_ok());
    ///
    /// let degenerate = BreakpointTable::new(vec![Breakpoint::new(5.0, 5.0, 0, 50)]);
    /// assert!(degenerate.is_err());
    /// ```
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, BreakpointError> {
        if entries.is_empty() {
            return Err(BreakpointError::Empty);
        }
        let mut previous_c_hi: Option<f64> = None;
        for (index, entry) in entries.iter().enumerate() {
            if !entry.c_lo.is_finite() || !entry.c_hi.is_finite() {
                return Err(BreakpointError::NonFiniteBound { index });
            }
            if entry.c_hi <= entry.c_lo {
                return Err(BreakpointError::DegenerateInterval {
                    index,
                    c_lo: entry.c_lo,
                    c_hi: entry.c_hi,
                });
            }
            if entry.i_hi < entry.i_lo {
                return Err(BreakpointError::InvertedIndexRange {
                    index,
                    i_lo: entry.i_lo,
                    i_hi: entry.i_hi,
                });
            }
            if let Some(previous_c_hi) = previous_c_hi {
                if entry.c_lo <= previous_c_hi {
                    return Err(BreakpointError::Overlapping {
                        index,
                        c_lo: entry.c_lo,
                        previous_c_hi,
                    });
                }
            }
            previous_c_hi = Some(entry.c_hi);
        }
        Ok(Self { entries })
    }

    /// The standard table for `pollutant`.
    pub fn standard(pollutant: Pollutant) -> &'static BreakpointTable {
        &STANDARD_TABLES[pollutant.index()]
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// First interval admitting `concentration`, scanning in ascending order.
    pub fn find(&self, concentration: f64) -> Option<&Breakpoint> {
        self.entries.iter().find(|entry| entry.contains(concentration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_validate() {
        for pollutant in Pollutant::ALL {
            let table = BreakpointTable::standard(pollutant);
            assert_eq!(table.entries().len(), 6);
            assert_eq!(table.entries()[0].c_lo, 0.0);
            assert_eq!(table.entries()[5].i_hi, 500);
        }
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(BreakpointTable::new(vec![]), Err(BreakpointError::Empty));
    }

    #[test]
    fn test_rejects_degenerate_interval() {
        let result = BreakpointTable::new(vec![
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(11.0, 11.0, 51, 100),
        ]);
        assert_eq!(
            result,
            Err(BreakpointError::DegenerateInterval {
                index: 1,
                c_lo: 11.0,
                c_hi: 11.0
            })
        );
    }

    #[test]
    fn test_rejects_overlap_and_unsorted() {
        let overlapping = BreakpointTable::new(vec![
            Breakpoint::new(0.0, 10.0, 0, 50),
            Breakpoint::new(10.0, 20.0, 51, 100),
        ]);
        assert!(matches!(
            overlapping,
            Err(BreakpointError::Overlapping { index: 1, .. })
        ));

        let unsorted = BreakpointTable::new(vec![
            Breakpoint::new(20.0, 30.0, 51, 100),
            Breakpoint::new(0.0, 10.0, 0, 50),
        ]);
        assert!(matches!(
            unsorted,
            Err(BreakpointError::Overlapping { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_index_and_nan() {
        assert!(matches!(
            BreakpointTable::new(vec![Breakpoint::new(0.0, 10.0, 50, 0)]),
            Err(BreakpointError::InvertedIndexRange { index: 0, .. })
        ));
        assert_eq!(
            BreakpointTable::new(vec![Breakpoint::new(f64::NAN, 10.0, 0, 50)]),
            Err(BreakpointError::NonFiniteBound { index: 0 })
        );
    }

    #[test]
    fn test_find_uses_inclusive_bounds_and_respects_gaps() {
        let table = BreakpointTable::standard(Pollutant::Pm25);
        assert_eq!(table.find(12.0).map(|b| b.i_hi), Some(50));
        assert_eq!(table.find(12.1).map(|b| b.i_lo), Some(51));
        assert!(table.find(12.05).is_none());
        assert!(table.find(-0.1).is_none());
        assert!(table.find(500.5).is_none());
        assert!(table.find(f64::NAN).is_none());
    }
}
