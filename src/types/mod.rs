pub mod aqi_category;
pub mod field;
pub mod observation;
pub mod period;
pub mod pollutant;
pub mod wind_direction;
