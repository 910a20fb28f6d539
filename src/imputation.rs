//! Gap filling for numeric columns.
//!
//! Every function here is pure: it takes a column with gaps and returns a new column.
//! Columns are filled independently using only their own known values.

use chrono::NaiveDateTime;

/// How interior gaps are filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterpolationMethod {
    /// Linear in row position, ignoring the actual timestamps.
    #[default]
    Linear,
    /// Linear in elapsed time between the neighbouring known values.
    Time,
}

/// Which boundary gaps get filled by holding the nearest known value constant.
/// Interior gaps are always interpolated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitDirection {
    /// Fill leading and trailing gaps.
    #[default]
    Both,
    /// Fill trailing gaps only; leading gaps stay missing.
    Forward,
    /// Fill leading gaps only; trailing gaps stay missing.
    Backward,
}

impl LimitDirection {
    fn fills_leading(self) -> bool {
        matches!(self, LimitDirection::Both | LimitDirection::Backward)
    }

    fn fills_trailing(self) -> bool {
        matches!(self, LimitDirection::Both | LimitDirection::Forward)
    }
}

/// Fills gaps in `values`, treating rows as evenly spaced.
///
/// # Examples
///
/// ```rust
/// use airq::{interpolate, LimitDirection};
///
/// let filled = interpolate(&[None, Some(1.0), None, Some(3.0), None], LimitDirection::Both);
/// assert_eq!(filled, vec![Some(1.0), Some(1.0), Some(2.0), Some(3.0), Some(3.0)]);
/// ```
pub fn interpolate(values: &[Option<f64>], direction: LimitDirection) -> Vec<Option<f64>> {
    let positions: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    interpolate_at(&positions, values, direction)
}

/// Fills gaps in `values`, weighting interior gaps by the distance between `positions`.
///
/// `positions` must be non-decreasing. Non-finite values count as missing. A column without
/// any known value is returned all missing. If `positions` and `values` differ in length no
/// gap can be placed, and `values` is returned as given.
pub fn interpolate_at(
    positions: &[f64],
    values: &[Option<f64>],
    direction: LimitDirection,
) -> Vec<Option<f64>> {
    if positions.len() != values.len() {
        return values.to_vec();
    }
    let mut filled: Vec<Option<f64>> = values
        .iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect();

    let known: Vec<usize> = filled
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|_| i))
        .collect();
    let (Some(&first), Some(&last)) = (known.first(), known.last()) else {
        return filled;
    };

    for pair in known.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b - a < 2 {
            continue;
        }
        let (Some(va), Some(vb)) = (filled[a], filled[b]) else {
            continue;
        };
        let span = positions[b] - positions[a];
        for i in a + 1..b {
            let fraction = if span > 0.0 {
                (positions[i] - positions[a]) / span
            } else {
                0.0
            };
            filled[i] = Some(va + (vb - va) * fraction);
        }
    }

    if direction.fills_leading() {
        let value = filled[first];
        filled[..first].iter_mut().for_each(|v| *v = value);
    }
    if direction.fills_trailing() {
        let value = filled[last];
        filled[last + 1..].iter_mut().for_each(|v| *v = value);
    }
    filled
}

/// Fills one column of an hourly series with the configured method.
pub fn impute_column(
    datetimes: &[NaiveDateTime],
    values: &[Option<f64>],
    method: InterpolationMethod,
    direction: LimitDirection,
) -> Vec<Option<f64>> {
    match method {
        InterpolationMethod::Linear => interpolate(values, direction),
        InterpolationMethod::Time => {
            let positions: Vec<f64> = datetimes
                .iter()
                .map(|dt| dt.and_utc().timestamp() as f64)
                .collect();
            interpolate_at(&positions, values, direction)
        }
    }
}
