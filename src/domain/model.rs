use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column order of the produced dataset. Matches the field order of
/// [`CommissionRecord`], which the writer serializes through serde.
pub const OUTPUT_HEADER: [&str; 5] = [
    "category",
    "subject",
    "wb_rate",
    "seller_to_wb_rate",
    "seller_direct_rate",
];

/// One raw CSV row as read from the spreadsheet export.
pub type RawRow = Vec<String>;

/// Marketplace commission rates for one category/subject pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRecord {
    pub category: String,
    pub subject: String,
    pub wb_rate: f64,
    pub seller_to_wb_rate: f64,
    pub seller_direct_rate: f64,
}

impl CommissionRecord {
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.category, &self.subject)
    }

    /// A record without FBO and FBS-to-WB rates carries no commission data.
    pub fn has_primary_rate(&self) -> bool {
        self.wb_rate != 0.0 || self.seller_to_wb_rate != 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RejectReason {
    TooFewFields,
    MissingCategoryOrSubject,
    HeaderRow,
    SectionBanner,
    MetadataRow,
    ZeroRates,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectReason::TooFewFields => "too few fields",
            RejectReason::MissingCategoryOrSubject => "empty category or subject",
            RejectReason::HeaderRow => "header row",
            RejectReason::SectionBanner => "section banner",
            RejectReason::MetadataRow => "metadata row",
            RejectReason::ZeroRates => "zero rates",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectStats {
    counts: BTreeMap<RejectReason, usize>,
}

impl RejectStats {
    pub fn record(&mut self, reason: RejectReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    pub fn count(&self, reason: RejectReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RejectReason, usize)> + '_ {
        self.counts.iter().map(|(reason, count)| (*reason, *count))
    }
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub records: Vec<CommissionRecord>,
    pub rejected: RejectStats,
}

#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub output_path: String,
    pub records: Vec<CommissionRecord>,
    pub rejected: RejectStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wb_rate: f64, seller_to_wb_rate: f64) -> CommissionRecord {
        CommissionRecord {
            category: "Техника".to_string(),
            subject: "Кабели".to_string(),
            wb_rate,
            seller_to_wb_rate,
            seller_direct_rate: 5.0,
        }
    }

    #[test]
    fn test_has_primary_rate() {
        assert!(record(27.5, 0.0).has_primary_rate());
        assert!(record(0.0, 31.0).has_primary_rate());
        assert!(!record(0.0, 0.0).has_primary_rate());
        assert!(!record(-0.0, 0.0).has_primary_rate());
    }

    #[test]
    fn test_reject_stats_counts() {
        let mut stats = RejectStats::default();
        stats.record(RejectReason::TooFewFields);
        stats.record(RejectReason::TooFewFields);
        stats.record(RejectReason::ZeroRates);

        assert_eq!(stats.count(RejectReason::TooFewFields), 2);
        assert_eq!(stats.count(RejectReason::HeaderRow), 0);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.iter().collect::<Vec<_>>(),
            vec![(RejectReason::TooFewFields, 2), (RejectReason::ZeroRates, 1)]
        );
    }
}
