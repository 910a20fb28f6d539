use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BreakpointError {
    #[error("Breakpoint table has no entries")]
    Empty,

    #[error("Breakpoint {index} has a non-finite concentration bound")]
    NonFiniteBound { index: usize },

    #[error("Breakpoint {index} has C_hi ({c_hi}) not greater than C_lo ({c_lo})")]
    DegenerateInterval { index: usize, c_lo: f64, c_hi: f64 },

    #[error("Breakpoint {index} has I_hi ({i_hi}) below I_lo ({i_lo})")]
    InvertedIndexRange { index: usize, i_lo: u32, i_hi: u32 },

    #[error(
        "Breakpoint {index} starts at {c_lo}, at or below the previous upper bound {previous_c_hi}"
    )]
    Overlapping {
        index: usize,
        c_lo: f64,
        previous_c_hi: f64,
    },
}
