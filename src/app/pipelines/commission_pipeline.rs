use crate::core::filter::filter_row;
use crate::core::numeric::parse_russian_number;
use crate::core::{
    CommissionRecord, ConfigProvider, ConversionResult, Pipeline, RawRow, RejectReason,
    RejectStats, Storage,
};
use crate::domain::model::OUTPUT_HEADER;
use crate::utils::error::{EtlError, Result};

/// Converts the commission sheet export into `wb_commissions.csv`.
pub struct CommissionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CommissionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CommissionPipeline<S, C> {
    fn extract(&self) -> Result<Vec<RawRow>> {
        tracing::debug!("Reading {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        // The export mixes banner, header and data rows of different widths.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(rows)
    }

    fn transform(&self, rows: Vec<RawRow>) -> Result<ConversionResult> {
        let mut records = Vec::new();
        let mut rejected = RejectStats::default();

        for (index, row) in rows.iter().enumerate() {
            let fields = match filter_row(row) {
                Ok(fields) => fields,
                Err(reason) => {
                    tracing::debug!("Skipping row {}: {}", index + 1, reason);
                    rejected.record(reason);
                    continue;
                }
            };

            let record = CommissionRecord {
                category: fields.category.to_string(),
                subject: fields.subject.to_string(),
                wb_rate: parse_russian_number(fields.wb_rate),
                seller_to_wb_rate: parse_russian_number(fields.seller_to_wb_rate),
                seller_direct_rate: parse_russian_number(fields.seller_direct_rate),
            };

            if !record.has_primary_rate() {
                tracing::debug!(
                    "Skipping row {}: {} ({} / {})",
                    index + 1,
                    RejectReason::ZeroRates,
                    record.category,
                    record.subject
                );
                rejected.record(RejectReason::ZeroRates);
                continue;
            }

            records.push(record);
        }

        // sort_by is stable, duplicate keys keep input order
        records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        Ok(ConversionResult { records, rejected })
    }

    fn load(&self, result: &ConversionResult) -> Result<String> {
        let output_path = self.config.output_path();

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        // Written by hand so an empty dataset still gets its header.
        wtr.write_record(OUTPUT_HEADER)?;
        for record in &result.records {
            wtr.serialize(record)?;
        }
        let data = wtr
            .into_inner()
            .map_err(|e| EtlError::IoError(e.into_error()))?;

        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage.write_file(output_path, &data)?;

        Ok(output_path.to_string())
    }
}
