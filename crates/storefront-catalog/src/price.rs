//! Price display formatting.
//!
//! Catalog prices arrive as plain numbers. The storefront shows them with
//! thousands grouping followed by a currency suffix, e.g. `12,000원`.

use serde::{Deserialize, Serialize};

/// How a price amount is rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    /// Text appended after the grouped amount.
    pub suffix: String,
    /// Thousands separator.
    pub separator: char,
    /// Digits shown after the decimal point.
    pub fraction_digits: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            suffix: "원".to_string(),
            separator: ',',
            fraction_digits: 0,
        }
    }
}

impl PriceFormat {
    /// Create a format with the given suffix and the default grouping.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..Self::default()
        }
    }

    /// Set the thousands separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the number of fraction digits.
    pub fn fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Format an amount as a display string (e.g., "1,000원").
    pub fn format(&self, amount: f64) -> String {
        format!("{}{}", self.format_amount(amount), self.suffix)
    }

    /// Format an amount without the suffix (e.g., "1,000").
    pub fn format_amount(&self, amount: f64) -> String {
        let places = self.fraction_digits as usize;
        let fixed = format!("{:.places$}", amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
        if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.separator));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_groups_thousands() {
        let fmt = PriceFormat::default();
        assert_eq!(fmt.format(1000.0), "1,000원");
        assert_eq!(fmt.format(1_234_567.0), "1,234,567원");
        assert_eq!(fmt.format(999.0), "999원");
        assert_eq!(fmt.format(0.0), "0원");
    }

    #[test]
    fn test_fraction_digits() {
        let fmt = PriceFormat::with_suffix(" USD").fraction_digits(2);
        assert_eq!(fmt.format(49.99), "49.99 USD");
        assert_eq!(fmt.format(12345.5), "12,345.50 USD");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        let fmt = PriceFormat::default();
        assert_eq!(fmt.format(1999.6), "2,000원");
    }

    #[test]
    fn test_custom_separator() {
        let fmt = PriceFormat::with_suffix(" €").separator('.');
        assert_eq!(fmt.format(25000.0), "25.000 €");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        let fmt = PriceFormat::default();
        assert_eq!(fmt.format_amount(-1500.0), "-1,500");
        assert_eq!(fmt.format_amount(-0.2), "0");
    }
}
