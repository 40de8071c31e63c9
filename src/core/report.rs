use crate::core::catalog::find_subject_containing;
use crate::domain::model::ConversionOutcome;
use std::io::{self, Write};

pub const SPOT_CHECK_SUBJECT: &str = "Накладные ресницы";

/// Print the record count, then the FBO rate of the spot-check subject if
/// any converted record mentions it.
pub fn print_summary<W: Write>(
    out: &mut W,
    outcome: &ConversionOutcome,
    spot_check_subject: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "Converted {} categories to {}",
        outcome.records.len(),
        outcome.output_path
    )?;

    if let Some(record) = find_subject_containing(&outcome.records, spot_check_subject) {
        writeln!(out, "  Nakladnye resnitsy: FBO={:?}%", record.wb_rate)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CommissionRecord, RejectStats};

    fn outcome(records: Vec<CommissionRecord>) -> ConversionOutcome {
        ConversionOutcome {
            output_path: "public/data/wb_commissions.csv".to_string(),
            records,
            rejected: RejectStats::default(),
        }
    }

    fn record(subject: &str, wb_rate: f64) -> CommissionRecord {
        CommissionRecord {
            category: "Красота".to_string(),
            subject: subject.to_string(),
            wb_rate,
            seller_to_wb_rate: 31.0,
            seller_direct_rate: 3.0,
        }
    }

    fn render(outcome: &ConversionOutcome) -> String {
        let mut buf = Vec::new();
        print_summary(&mut buf, outcome, SPOT_CHECK_SUBJECT).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_reports_spot_check_rate() {
        let text = render(&outcome(vec![
            record("Тушь", 25.0),
            record("Накладные ресницы и клей", 27.5),
        ]));

        assert_eq!(
            text,
            "Converted 2 categories to public/data/wb_commissions.csv\n  Nakladnye resnitsy: FBO=27.5%\n"
        );
    }

    #[test]
    fn test_whole_rate_keeps_fraction() {
        let text = render(&outcome(vec![record("Накладные ресницы", 30.0)]));
        assert!(text.ends_with("FBO=30.0%\n"));
    }

    #[test]
    fn test_no_match_prints_count_only() {
        let text = render(&outcome(vec![record("Тушь", 25.0)]));
        assert_eq!(text, "Converted 1 categories to public/data/wb_commissions.csv\n");
    }

    #[test]
    fn test_empty_outcome() {
        let text = render(&outcome(Vec::new()));
        assert_eq!(text, "Converted 0 categories to public/data/wb_commissions.csv\n");
    }
}
