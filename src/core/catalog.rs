use crate::domain::model::CommissionRecord;
use crate::utils::error::Result;
use std::io::Read;

/// First record whose subject contains `needle`.
pub fn find_subject_containing<'a>(
    records: &'a [CommissionRecord],
    needle: &str,
) -> Option<&'a CommissionRecord> {
    records.iter().find(|r| r.subject.contains(needle))
}

/// Read-side view of a produced `wb_commissions.csv`, offering the lookups
/// the calculator frontend performs on it.
#[derive(Debug, Clone, Default)]
pub struct CommissionCatalog {
    records: Vec<CommissionRecord>,
}

impl CommissionCatalog {
    pub fn new(records: Vec<CommissionRecord>) -> Self {
        Self { records }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let records = rdr
            .deserialize::<CommissionRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} commission records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CommissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring search over subject and category.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CommissionRecord> {
        if query.is_empty() {
            return self.records.iter().take(limit).collect();
        }

        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.subject.to_lowercase().contains(&query)
                    || r.category.to_lowercase().contains(&query)
            })
            .take(limit)
            .collect()
    }

    pub fn find_by_subject(&self, subject: &str) -> Option<&CommissionRecord> {
        self.records.iter().find(|r| r.subject == subject)
    }

    pub fn find_subject_containing(&self, needle: &str) -> Option<&CommissionRecord> {
        find_subject_containing(&self.records, needle)
    }
}
