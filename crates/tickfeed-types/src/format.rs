//! Numeric display helpers.

/// Formats a value with a fixed number of fractional digits.
#[must_use]
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Formats a quantity with `,` thousands separators.
#[must_use]
pub fn format_quantity(quantity: u64) -> String {
    let digits = quantity.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.2345, 2), "1.23");
        assert_eq!(format_decimal(1.5, 4), "1.5000");
        assert_eq!(format_decimal(42.0, 0), "42");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0), "0");
        assert_eq!(format_quantity(999), "999");
        assert_eq!(format_quantity(1_000), "1,000");
        assert_eq!(format_quantity(1_000_000), "1,000,000");
        assert_eq!(format_quantity(12_345_678), "12,345,678");
    }
}
