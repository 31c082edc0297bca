use chrono::NaiveDate;

/// Parse the calendar date of a record field.
///
/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`, optionally followed by a time part
/// separated by `T` or a space. The time of day is dropped.
/// Example: "2025-04-20T09:30:00Z" -> 2025-04-20
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let date_part = value
        .trim()
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 20);
        assert_eq!(parse_record_date("2025-04-20"), expected);
        assert_eq!(parse_record_date("2025/04/20"), expected);
        assert_eq!(parse_record_date(" 2025-04-20 "), expected);
    }

    #[test]
    fn test_parse_with_time() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 20);
        assert_eq!(parse_record_date("2025-04-20T23:59:59.123Z"), expected);
        assert_eq!(parse_record_date("2025/04/20 08:00"), expected);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("未定"), None);
        assert_eq!(parse_record_date("2025-02-30"), None);
        assert_eq!(parse_record_date("20.04.2025"), None);
    }
}
