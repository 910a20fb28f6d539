pub mod breakpoints;
pub mod engine;
pub mod error;
