use crate::domain::model::RejectReason;

pub const MIN_FIELDS: usize = 6;

const CATEGORY_HEADER: &str = "Категория";
const PINNED_MARKER: &str = "📌";
const DOCUMENT_MARKER: &str = "📄";
// Base glyph only; the sheet writes it with and without U+FE0F.
const CALENDAR_MARKER: &str = "🗓";
const LAST_UPDATED_MARKER: &str = "Последнее";

/// Trimmed text cells of a row that passed the filter. Rates are still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields<'a> {
    pub category: &'a str,
    pub subject: &'a str,
    pub wb_rate: &'a str,
    pub seller_to_wb_rate: &'a str,
    pub seller_direct_rate: &'a str,
}

/// Decide whether a spreadsheet row carries commission data.
///
/// Column 0 is unused; columns 1..=5 hold category, subject and the three
/// rates. Rules short-circuit in order: field count, empty key cells, the
/// header row, section banners, then the "last updated" metadata row.
pub fn filter_row(fields: &[String]) -> Result<RowFields<'_>, RejectReason> {
    if fields.len() < MIN_FIELDS {
        return Err(RejectReason::TooFewFields);
    }

    let category = fields[1].trim();
    let subject = fields[2].trim();

    if category.is_empty() || subject.is_empty() {
        return Err(RejectReason::MissingCategoryOrSubject);
    }
    if category == CATEGORY_HEADER {
        return Err(RejectReason::HeaderRow);
    }
    if category.contains(PINNED_MARKER) || category.contains(DOCUMENT_MARKER) {
        return Err(RejectReason::SectionBanner);
    }
    if category.contains(CALENDAR_MARKER) || subject.contains(LAST_UPDATED_MARKER) {
        return Err(RejectReason::MetadataRow);
    }

    Ok(RowFields {
        category,
        subject,
        wb_rate: fields[3].trim(),
        seller_to_wb_rate: fields[4].trim(),
        seller_direct_rate: fields[5].trim(),
    })
}
