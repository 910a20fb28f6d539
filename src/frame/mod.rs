pub mod enriched_frame;
pub mod error;
pub mod export;
pub mod extractor;

use crate::error::AirQualityError;
use crate::pipeline::{EnrichedDataset, Pipeline};
use polars::prelude::DataFrame;

impl Pipeline {
    /// Reads observations from a station frame (see [`extractor::observations_from_frame`])
    /// and enriches them.
    pub fn enrich_frame(&self, df: &DataFrame) -> Result<EnrichedDataset, AirQualityError> {
        let observations = extractor::observations_from_frame(df)?;
        Ok(self.enrich(observations))
    }
}
