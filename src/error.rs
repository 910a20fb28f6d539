use crate::aqi::error::BreakpointError;
use crate::frame::error::FrameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    Breakpoint(#[from] BreakpointError),

    #[error(transparent)]
    Frame(#[from] FrameError),
}
