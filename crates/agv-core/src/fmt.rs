//! 數值格式化

use rust_decimal::Decimal;

/// 格式化實數：去除多餘的尾零，但至少保留一位小數（`80` → `80.0`，`5.50` → `5.5`）
pub fn format_real(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::from(80), "80.0")]
    #[case(Decimal::new(55, 1), "5.5")]
    #[case(Decimal::new(600, 2), "6.0")]
    #[case(Decimal::new(440, 1), "44.0")]
    #[case(Decimal::ZERO, "0.0")]
    #[case(Decimal::new(-15, 1), "-1.5")]
    #[case(Decimal::new(1225, 3), "1.225")]
    #[case(Decimal::from(10_000_000), "10000000.0")]
    #[case(Decimal::new(1, 4), "0.0001")]
    fn test_format_real(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_real(value), expected);
    }
}
