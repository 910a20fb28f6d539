//! Sub-index computation and combination into an overall AQI.

use crate::aqi::breakpoints::BreakpointTable;
use crate::types::aqi_category::AqiCategory;
use crate::types::observation::{Concentrations, SubIndices};
use crate::types::pollutant::Pollutant;
use serde::Serialize;

/// Computes the sub-index of `concentration` against `table`.
///
/// The first interval with `c_lo <= concentration <= c_hi` is used and the result is
/// `round((i_hi - i_lo) / (c_hi - c_lo) * (concentration - c_lo) + i_lo)`, rounding halves
/// away from zero. Missing, non-finite or out-of-table concentrations (including values
/// falling into a gap between intervals) give `None`; nothing is clamped.
///
/// # Examples
///
/// ```rust
/// use airq::{sub_index, BreakpointTable, Pollutant};
///
/// let pm25 = BreakpointTable::standard(Pollutant::Pm25);
/// assert_eq!(sub_index(Some(12.0), pm25), Some(50));
/// assert_eq!(sub_index(Some(12.1), pm25), Some(51));
/// assert_eq!(sub_index(Some(600.0), pm25), None);
/// assert_eq!(sub_index(None, pm25), None);
/// ```
pub fn sub_index(concentration: Option<f64>, table: &BreakpointTable) -> Option<u32> {
    let concentration = concentration?;
    let interval = table.find(concentration)?;
    Some(interval.interpolate(concentration).round() as u32)
}

/// The maximum of the defined sub-indices, `None` if all are missing.
pub fn overall_aqi<I>(sub_indices: I) -> Option<u32>
where
    I: IntoIterator<Item = Option<u32>>,
{
    sub_indices.into_iter().flatten().max()
}

/// Categorizes an AQI value. See [`AqiCategory::from_aqi`].
pub fn category(aqi: Option<u32>) -> AqiCategory {
    AqiCategory::from_aqi(aqi)
}

/// Index values derived from one record's concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiAssessment {
    pub sub_indices: SubIndices,
    pub aqi: Option<u32>,
    pub category: AqiCategory,
}

/// Holds one breakpoint table per pollutant and evaluates records against them.
///
/// [`AqiEngine::standard`] (also the `Default`) uses the standard 24-hour tables.
/// Individual tables can be swapped with [`AqiEngine::with_table`], for example to apply a
/// revised PM2.5 table:
///
/// ```rust
/// use airq::{AqiEngine, Breakpoint, BreakpointTable, Pollutant};
///
/// # fn main() -> Result<(), airq::BreakpointError> {
/// let revised = BreakpointTable::new(vec![
///     Breakpoint::new(0.0, 9.0, 0, 50),
///     Breakpoint::new(9.1, 35.4, 51, 100),
///     Breakpoint::new(35.5, 55.4, 101, 150),
///     Breakpoint::new(55.5, 125.4, 151, 200),
///     Breakpoint::new(125.5, 225.4, 201, 300),
///     Breakpoint::new(225.5, 500.0, 301, 500),
/// ])?;
/// let engine = AqiEngine::standard().with_table(Pollutant::Pm25, revised);
/// assert_eq!(engine.sub_index(Pollutant::Pm25, Some(9.0)), Some(50));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AqiEngine {
    tables: [BreakpointTable; 6],
}

impl Default for AqiEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl AqiEngine {
    pub fn standard() -> Self {
        Self {
            tables: Pollutant::ALL.map(|p| BreakpointTable::standard(p).clone()),
        }
    }

    pub fn with_table(mut self, pollutant: Pollutant, table: BreakpointTable) -> Self {
        self.tables[pollutant.index()] = table;
        self
    }

    pub fn table(&self, pollutant: Pollutant) -> &BreakpointTable {
        &self.tables[pollutant.index()]
    }

    pub fn sub_index(&self, pollutant: Pollutant, concentration: Option<f64>) -> Option<u32> {
        sub_index(concentration, self.table(pollutant))
    }

    pub fn sub_indices(&self, concentrations: &Concentrations) -> SubIndices {
        let mut result = SubIndices::default();
        for pollutant in Pollutant::ALL {
            result.set(
                pollutant,
                self.sub_index(pollutant, concentrations.get(pollutant)),
            );
        }
        result
    }

    /// Sub-indices, overall AQI and category for one record.
    pub fn assess(&self, concentrations: &Concentrations) -> AqiAssessment {
        let sub_indices = self.sub_indices(concentrations);
        let aqi = overall_aqi(sub_indices.0);
        AqiAssessment {
            sub_indices,
            aqi,
            category: category(aqi),
        }
    }
}
