//! Contains the `EnrichedLazyFrame` structure for lazy operations on enriched station data.

use crate::frame::export::COL_DATETIME;
use crate::types::period::YearRange;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{col, lit, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the output of the enrichment pipeline.
///
/// The frame is expected to carry a timezone-naive `datetime` column, as produced by
/// [`crate::EnrichedDataset::to_lazy`]. Filters are applied lazily; nothing is computed until
/// the inner `frame` is collected.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use airq::{enrich, Observation, Pollutant};
/// use polars::prelude::{col, lit};
///
/// let observations = vec![
///     Observation::at(2014, 3, 1, 0).unwrap().with_concentration(Pollutant::No2, 20.0),
///     Observation::at(2014, 3, 1, 1).unwrap().with_concentration(Pollutant::No2, 90.0),
/// ];
/// let lazy = enrich(observations).to_lazy()?;
/// let polluted = lazy.filter(col("NO2").gt(lit(50.0))).frame.collect()?;
/// assert_eq!(polluted.height(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EnrichedLazyFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl EnrichedLazyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Returns a new `EnrichedLazyFrame` with `predicate` applied.
    pub fn filter(&self, predicate: Expr) -> EnrichedLazyFrame {
        EnrichedLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps records with `start <= datetime <= end`.
    pub fn get_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> EnrichedLazyFrame {
        self.filter(
            col(COL_DATETIME)
                .gt_eq(lit(start))
                .and(col(COL_DATETIME).lt_eq(lit(end))),
        )
    }

    /// Keeps the records of one calendar day.
    pub fn get_for_date(&self, date: NaiveDate) -> EnrichedLazyFrame {
        let start = date.and_time(NaiveTime::MIN);
        let end = start + Duration::days(1);
        self.filter(
            col(COL_DATETIME)
                .gt_eq(lit(start))
                .and(col(COL_DATETIME).lt(lit(end))),
        )
    }

    /// Keeps the records whose year falls in `years` (inclusive).
    pub fn get_years(&self, years: impl Into<YearRange>) -> EnrichedLazyFrame {
        let years = years.into();
        let year = col(COL_DATETIME).dt().year();
        self.filter(
            year.clone()
                .gt_eq(lit(years.start))
                .and(year.lt_eq(lit(years.end))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich;
    use crate::types::observation::Observation;
    use crate::types::pollutant::Pollutant;
    use std::error::Error;

    fn lazy_frame() -> Result<EnrichedLazyFrame, Box<dyn Error>> {
        let observations = vec![
            Observation::at(2013, 12, 31, 23).unwrap(),
            Observation::at(2014, 1, 1, 0).unwrap(),
            Observation::at(2014, 1, 1, 12).unwrap(),
            Observation::at(2014, 1, 1, 23).unwrap(),
            Observation::at(2014, 1, 2, 0).unwrap(),
            Observation::at(2016, 6, 1, 0).unwrap(),
            Observation::at(2017, 1, 1, 0).unwrap(),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, o)| o.with_concentration(Pollutant::So2, i as f64))
        .collect::<Vec<_>>();
        Ok(enrich(observations).to_lazy()?)
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_get_range_is_inclusive() -> Result<(), Box<dyn Error>> {
        let df = lazy_frame()?
            .get_range(at(2014, 1, 1, 0), at(2014, 1, 1, 23))
            .frame
            .collect()?;
        assert_eq!(df.height(), 3);
        Ok(())
    }

    #[test]
    fn test_get_for_date() -> Result<(), Box<dyn Error>> {
        let day = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        let df = lazy_frame()?.get_for_date(day).frame.collect()?;
        let so2 = df.column("SO2")?.f64()?;
        let values: Vec<Option<f64>> = so2.into_iter().collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
        Ok(())
    }

    #[test]
    fn test_get_years() -> Result<(), Box<dyn Error>> {
        let df = lazy_frame()?.get_years((2014, 2016)).frame.collect()?;
        assert_eq!(df.height(), 5);
        Ok(())
    }

    #[test]
    fn test_filters_compose() -> Result<(), Box<dyn Error>> {
        let df = lazy_frame()?
            .get_years((2014, 2016))
            .filter(col("SO2").gt(lit(3.0)))
            .frame
            .collect()?;
        assert_eq!(df.height(), 2);
        Ok(())
    }
}
