mod aggregation;
mod analysis;
mod aqi;
mod error;
mod frame;
mod imputation;
mod pipeline;
mod types;

pub use error::AirQualityError;
pub use pipeline::*;

pub use aqi::breakpoints::{Breakpoint, BreakpointTable};
pub use aqi::engine::{category, overall_aqi, sub_index, AqiAssessment, AqiEngine};
pub use aqi::error::BreakpointError;

pub use imputation::{
    impute_column, interpolate, interpolate_at, InterpolationMethod, LimitDirection,
};

pub use aggregation::circular::{circular_mean, wind_profile_by_hour, HourlyWindProfile};
pub use aggregation::temporal::{
    aggregate, mean_of_present, GroupKey, GroupMeans, GroupValue, GroupedMeans,
};

pub use analysis::correlation::{
    correlation_matrix, meteorology_correlations, pearson, wind_pollutant_correlations,
    CorrelationMatrix,
};
pub use analysis::summary::{
    daily_summary, summarize_aqi, summarize_pollutant, AqiSummary, DailySummary, PollutantSummary,
};

pub use frame::enriched_frame::EnrichedLazyFrame;
pub use frame::error::FrameError;
pub use frame::extractor::observations_from_frame;

pub use types::aqi_category::AqiCategory;
pub use types::field::Field;
pub use types::observation::{
    Concentrations, EnrichedObservation, Meteorology, Observation, SubIndices,
};
pub use types::period::{YearMonth, YearRange};
pub use types::pollutant::Pollutant;
pub use types::wind_direction::{encode_label, WindDirection};
