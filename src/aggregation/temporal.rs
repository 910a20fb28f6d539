//! Grouped arithmetic means over enriched records.

use crate::types::field::Field;
use crate::types::observation::EnrichedObservation;
use crate::types::period::YearMonth;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Mean of the present, finite values; `None` when there are none.
pub fn mean_of_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// What to group records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupKey {
    /// Calendar month of a specific year.
    YearMonth,
    /// Month of the year (1-12), pooled across all years.
    Month,
    /// Hour of day (0-23), pooled across all dates.
    Hour,
    /// Calendar date.
    Date,
}

impl GroupKey {
    pub fn value_of(self, row: &EnrichedObservation) -> GroupValue {
        match self {
            GroupKey::YearMonth => GroupValue::YearMonth(YearMonth::of(row.datetime)),
            GroupKey::Month => GroupValue::Month(row.month()),
            GroupKey::Hour => GroupValue::Hour(row.hour()),
            GroupKey::Date => GroupValue::Date(row.date()),
        }
    }
}

/// The key of one group. Groups sort chronologically within a key kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GroupValue {
    YearMonth(YearMonth),
    Month(u32),
    Hour(u32),
    Date(NaiveDate),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::YearMonth(ym) => write!(f, "{}", ym),
            GroupValue::Month(month) => write!(f, "{:02}", month),
            GroupValue::Hour(hour) => write!(f, "{:02}", hour),
            GroupValue::Date(date) => write!(f, "{}", date),
        }
    }
}

/// Means of one group, one entry per requested field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeans {
    pub key: GroupValue,
    /// Number of records in the group, regardless of missing values.
    pub rows: usize,
    pub means: Vec<Option<f64>>,
}

/// Result of [`aggregate`]: groups in ascending key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedMeans {
    pub key: GroupKey,
    pub fields: Vec<Field>,
    pub groups: Vec<GroupMeans>,
}

impl GroupedMeans {
    /// Mean of `field` in the group `key`, `None` if either is absent or the mean is missing.
    pub fn get(&self, key: GroupValue, field: Field) -> Option<f64> {
        let column = self.fields.iter().position(|f| *f == field)?;
        self.groups
            .iter()
            .find(|g| g.key == key)
            .and_then(|g| g.means[column])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups `rows` by `key` and averages each of `fields` per group.
///
/// Missing values are ignored; a group with no present value for a field gets a missing
/// mean for it.
///
/// # Examples
///
/// ```rust
/// use airq::{aggregate, enrich, Field, GroupKey, Observation, Pollutant};
///
/// let observations = vec![
///     Observation::at(2014, 3, 1, 0).unwrap().with_concentration(Pollutant::So2, 5.0),
///     Observation::at(2014, 3, 1, 1).unwrap().with_concentration(Pollutant::So2, 7.0),
/// ];
/// let enriched = enrich(observations);
/// let so2 = Field::Pollutant(Pollutant::So2);
/// let monthly = aggregate(enriched.rows(), GroupKey::YearMonth, &[so2]);
/// assert_eq!(monthly.groups[0].means[0], Some(6.0));
/// ```
pub fn aggregate(rows: &[EnrichedObservation], key: GroupKey, fields: &[Field]) -> GroupedMeans {
    let mut groups: BTreeMap<GroupValue, Vec<&EnrichedObservation>> = BTreeMap::new();
    for row in rows {
        groups.entry(key.value_of(row)).or_default().push(row);
    }
    let groups = groups
        .into_iter()
        .map(|(value, members)| GroupMeans {
            key: value,
            rows: members.len(),
            means: fields
                .iter()
                .map(|field| mean_of_present(members.iter().map(|r| r.value(*field))))
                .collect(),
        })
        .collect();
    GroupedMeans {
        key,
        fields: fields.to_vec(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::aqi_category::AqiCategory;
    use crate::types::observation::{Concentrations, Meteorology, SubIndices};
    use crate::types::pollutant::Pollutant;

    fn row(year: i32, month: u32, day: u32, hour: u32, no2: Option<f64>) -> EnrichedObservation {
        EnrichedObservation {
            datetime: NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            concentrations: Concentrations {
                no2,
                ..Default::default()
            },
            meteorology: Meteorology {
                temperature: Some(hour as f64),
                ..Default::default()
            },
            wind_direction: None,
            wind_degrees: None,
            sub_indices: SubIndices::default(),
            aqi: no2.map(|v| v as u32),
            category: AqiCategory::Unknown,
        }
    }

    #[test]
    fn test_mean_of_present() {
        assert_eq!(mean_of_present([Some(5.0), None, Some(7.0)]), Some(6.0));
        assert_eq!(mean_of_present([None, None]), None);
        assert_eq!(mean_of_present(Vec::new()), None);
        assert_eq!(mean_of_present([Some(f64::NAN), Some(2.0)]), Some(2.0));
    }

    #[test]
    fn test_missing_values_ignored_in_group_mean() {
        let rows = vec![
            row(2014, 1, 1, 0, Some(5.0)),
            row(2014, 1, 2, 0, None),
            row(2014, 1, 3, 0, Some(7.0)),
        ];
        let no2 = Field::Pollutant(Pollutant::No2);
        let result = aggregate(&rows, GroupKey::YearMonth, &[no2]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.groups[0].rows, 3);
        assert_eq!(
            result.get(GroupValue::YearMonth(YearMonth::new(2014, 1)), no2),
            Some(6.0)
        );
    }

    #[test]
    fn test_group_with_only_missing_yields_missing() {
        let rows = vec![row(2014, 1, 1, 0, Some(5.0)), row(2014, 2, 1, 0, None)];
        let no2 = Field::Pollutant(Pollutant::No2);
        let result = aggregate(&rows, GroupKey::YearMonth, &[no2]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.groups[1].key, GroupValue::YearMonth(YearMonth::new(2014, 2)));
        assert_eq!(result.groups[1].means, vec![None]);
    }

    #[test]
    fn test_hour_groups_pool_dates_and_sort() {
        let rows = vec![
            row(2015, 5, 1, 13, Some(10.0)),
            row(2016, 7, 9, 2, Some(1.0)),
            row(2015, 5, 2, 13, Some(30.0)),
        ];
        let fields = [Field::Pollutant(Pollutant::No2), Field::Temperature, Field::Aqi];
        let result = aggregate(&rows, GroupKey::Hour, &fields);
        let keys: Vec<_> = result.groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![GroupValue::Hour(2), GroupValue::Hour(13)]);
        assert_eq!(result.get(GroupValue::Hour(13), fields[0]), Some(20.0));
        assert_eq!(result.get(GroupValue::Hour(13), Field::Temperature), Some(13.0));
        assert_eq!(result.get(GroupValue::Hour(13), Field::Aqi), Some(20.0));
        assert_eq!(result.get(GroupValue::Hour(13), Field::Rain), None);
    }

    #[test]
    fn test_date_groups() {
        let rows = vec![
            row(2015, 5, 1, 0, Some(10.0)),
            row(2015, 5, 1, 1, Some(20.0)),
            row(2015, 5, 2, 0, Some(40.0)),
        ];
        let result = aggregate(&rows, GroupKey::Date, &[Field::Pollutant(Pollutant::No2)]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.groups[0].means, vec![Some(15.0)]);
        assert_eq!(result.groups[0].key.to_string(), "2015-05-01");
    }

    #[test]
    fn test_month_groups_pool_years() {
        let rows = vec![
            row(2014, 3, 1, 0, Some(10.0)),
            row(2015, 3, 20, 5, Some(30.0)),
            row(2016, 1, 2, 0, Some(4.0)),
        ];
        let no2 = Field::Pollutant(Pollutant::No2);
        let result = aggregate(&rows, GroupKey::Month, &[no2]);
        let keys: Vec<_> = result.groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![GroupValue::Month(1), GroupValue::Month(3)]);
        assert_eq!(result.get(GroupValue::Month(3), no2), Some(20.0));
        assert_eq!(result.groups[1].rows, 2);
        assert_eq!(result.groups[1].key.to_string(), "03");
    }

    #[test]
    fn test_output_types_serialize() {
        fn assert_serialize<T: Serialize>() {}
        assert_serialize::<GroupKey>();
        assert_serialize::<GroupedMeans>();
        assert_serialize::<crate::pipeline::DataQualityReport>();
        assert_serialize::<crate::pipeline::EnrichedDataset>();
        assert_serialize::<crate::analysis::correlation::CorrelationMatrix>();
        assert_serialize::<crate::aqi::engine::AqiAssessment>();
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(&[], GroupKey::Hour, &[Field::Aqi]);
        assert!(result.is_empty());
    }
}
