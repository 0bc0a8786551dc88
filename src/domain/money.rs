use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Display and parsing wrapper around an exact decimal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl Money {
    pub const DISPLAY_DECIMALS: u32 = 2;

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.is_empty() {
            return None;
        }
        Decimal::from_str(s).ok().map(Self)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        let neg = rounded.is_sign_negative() && !rounded.is_zero();

        // scale is at most DISPLAY_DECIMALS here; pad the fraction up to it
        let plain = rounded.abs().to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let width = Self::DISPLAY_DECIMALS as usize;

        if neg {
            write!(f, "-{}.{:0<width$}", group_thousands(int_part), frac_part)
        } else {
            write!(f, "{}.{:0<width$}", group_thousands(int_part), frac_part)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::Money;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn fraction_digits(s: &str) -> Option<usize> {
        s.split_once('.').map(|(_, frac)| frac.len())
    }

    #[test]
    fn two_decimals_with_thousands_grouping() {
        assert_eq!(Money(dec!(1000.0)).to_string(), "1,000.00");
        assert_eq!(Money(dec!(1234567.5)).to_string(), "1,234,567.50");
        assert_eq!(Money(dec!(999)).to_string(), "999.00");
        assert_eq!(Money(dec!(0)).to_string(), "0.00");
        assert_eq!(Money(dec!(100000)).to_string(), "100,000.00");
    }

    #[test]
    fn huge_amounts_still_show_two_decimals() {
        let big = Decimal::from_str_exact("1000000000000000000000000000").unwrap();
        let shown = Money(big).to_string();
        assert_eq!(shown, "1,000,000,000,000,000,000,000,000,000.00");
        assert_eq!(fraction_digits(&shown), Some(2));

        let near_max = Decimal::from_str_exact("1000000000000000000000001000").unwrap();
        assert_eq!(fraction_digits(&Money(near_max).to_string()), Some(2));

        let shown = Money(Decimal::MAX).to_string();
        assert_eq!(shown, "79,228,162,514,264,337,593,543,950,335.00");
        assert_eq!(fraction_digits(&Money(Decimal::MIN).to_string()), Some(2));
    }

    #[test]
    fn single_fraction_digit_is_padded() {
        assert_eq!(Money(dec!(7.5)).to_string(), "7.50");
        assert_eq!(Money(dec!(-0.1)).to_string(), "-0.10");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Money(dec!(1.005)).to_string(), "1.01");
        assert_eq!(Money(dec!(1.004)).to_string(), "1.00");
        assert_eq!(Money(dec!(-2.345)).to_string(), "-2.35");
    }

    #[test]
    fn negative_amounts_keep_sign_but_not_negative_zero() {
        assert_eq!(Money(dec!(-100.0)).to_string(), "-100.00");
        assert_eq!(Money(dec!(-1500)).to_string(), "-1,500.00");
        assert_eq!(Money(dec!(-0.001)).to_string(), "0.00");
    }

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(Money::from_decimal_str(" 500.25 "), Some(Money(dec!(500.25))));
        assert_eq!(Money::from_decimal_str("-100"), Some(Money(dec!(-100))));
        assert_eq!(Money::from_decimal_str(""), None);
        assert_eq!(Money::from_decimal_str("12a"), None);
        assert_eq!(Money::from_decimal_str("1.2.3"), None);
    }
}
