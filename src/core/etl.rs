use crate::core::{ConversionOutcome, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConversionOutcome> {
        tracing::info!("Starting commission conversion");

        // Extract
        let rows = self.pipeline.extract()?;
        tracing::info!("Extracted {} rows", rows.len());

        // Transform
        let result = self.pipeline.transform(rows)?;
        tracing::info!(
            "Accepted {} records, rejected {} rows",
            result.records.len(),
            result.rejected.total()
        );
        for (reason, count) in result.rejected.iter() {
            tracing::debug!("Rejected {} rows: {}", count, reason);
        }

        // Load
        let output_path = self.pipeline.load(&result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(ConversionOutcome {
            output_path,
            records: result.records,
            rejected: result.rejected,
        })
    }
}
