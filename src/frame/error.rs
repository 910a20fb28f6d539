use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' could not be read as {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Row {row} has no value in timestamp column '{column}'")]
    MissingTimestampPart { row: usize, column: &'static str },

    #[error("Row {row} has an invalid timestamp {year:04}-{month:02}-{day:02} {hour:02}:00")]
    InvalidTimestamp {
        row: usize,
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
