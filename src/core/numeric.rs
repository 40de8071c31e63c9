/// Parse a number written with a Russian decimal comma, e.g. `"27,5"`.
///
/// Surrounding whitespace and one layer of double quotes are removed before
/// parsing. Empty or unparsable input yields `0.0`.
pub fn parse_russian_number(value: &str) -> f64 {
    let value = value.trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);

    if value.is_empty() {
        return 0.0;
    }

    value.replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_russian_number("27,5"), 27.5);
        assert_eq!(parse_russian_number("\"15,5\""), 15.5);
        assert_eq!(parse_russian_number("  \"3,25\" "), 3.25);
    }

    #[test]
    fn test_integers_and_points() {
        assert_eq!(parse_russian_number("31"), 31.0);
        assert_eq!(parse_russian_number("12.75"), 12.75);
        assert_eq!(parse_russian_number("-2,5"), -2.5);
    }

    #[test]
    fn test_invalid_input_is_zero() {
        assert_eq!(parse_russian_number(""), 0.0);
        assert_eq!(parse_russian_number("   "), 0.0);
        assert_eq!(parse_russian_number("\"\""), 0.0);
        assert_eq!(parse_russian_number("abc"), 0.0);
        assert_eq!(parse_russian_number("1,2,3"), 0.0);
        assert_eq!(parse_russian_number("27,5%"), 0.0);
    }

    #[test]
    fn test_strips_only_one_quote_layer() {
        assert_eq!(parse_russian_number("\"\"5\"\""), 0.0);
    }
}
