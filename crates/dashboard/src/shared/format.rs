/// Formats a yen amount with comma thousands separators
///
/// # Examples
/// ```
/// use dashboard::shared::format::format_yen;
/// assert_eq!(format_yen(1234567), "¥1,234,567");
/// assert_eq!(format_yen(-5000), "-¥5,000");
/// assert_eq!(format_yen(0), "¥0");
/// ```
pub fn format_yen(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}¥{}", sign, group_thousands(amount.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(42), "¥42");
        assert_eq!(format_yen(999), "¥999");
        assert_eq!(format_yen(1000), "¥1,000");
        assert_eq!(format_yen(1_000_000), "¥1,000,000");
        assert_eq!(format_yen(12_345_678), "¥12,345,678");
        assert_eq!(format_yen(-1_500), "-¥1,500");
        assert_eq!(format_yen(i64::MIN), "-¥9,223,372,036,854,775,808");
    }
}
