//! Pool price quotes and the advisory output estimate derived from them.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::token::SwapDirection;
use super::units::split_decimal;

/// Shown in place of an estimate or price that cannot be computed.
pub const PLACEHOLDER: &str = "?";

/// Decimal places of a rendered estimate.
pub const ESTIMATE_DECIMALS: u32 = 6;

/// Current pool rates, each "units of output per 1 unit of input".
///
/// `None` until the first successful refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub a_to_b: Option<String>,
    pub b_to_a: Option<String>,
}

impl Quote {
    #[must_use]
    pub fn new(a_to_b: impl Into<String>, b_to_a: impl Into<String>) -> Self {
        Self {
            a_to_b: Some(a_to_b.into()),
            b_to_a: Some(b_to_a.into()),
        }
    }

    /// Rate for one swap direction, if known.
    #[must_use]
    pub fn rate(&self, direction: SwapDirection) -> Option<&str> {
        match direction {
            SwapDirection::AToB => self.a_to_b.as_deref(),
            SwapDirection::BToA => self.b_to_a.as_deref(),
        }
    }
}

/// Estimate the output of swapping `input` at `rate`.
///
/// Returns `input * rate` rounded to six places, or [`PLACEHOLDER`] when the
/// input is empty or not a plain decimal, the rate is unknown, or the product
/// does not fit.
#[must_use]
pub fn estimate(input: &str, rate: Option<&str>) -> String {
    compute_estimate(input, rate).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn compute_estimate(input: &str, rate: Option<&str>) -> Option<String> {
    let input = parse_plain(input)?;
    let rate = parse_plain(rate?)?;

    let mut product = input
        .checked_mul(rate)?
        .round_dp_with_strategy(ESTIMATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    product.rescale(ESTIMATE_DECIMALS);
    Some(product.to_string())
}

fn parse_plain(value: &str) -> Option<Decimal> {
    let (whole, fraction) = split_decimal(value.trim())?;
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    Decimal::from_str(&format!("{whole}.{fraction}")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn estimate_multiplies_by_rate() {
        assert_eq!(estimate("10", Some("2.5")), "25.000000");
    }

    #[test]
    fn estimate_rounds_to_six_places() {
        assert_eq!(estimate("1", Some("0.3333333333")), "0.333333");
        assert_eq!(estimate("1", Some("0.0000005")), "0.000001");
    }

    #[test]
    fn estimate_placeholder_for_missing_input() {
        assert_eq!(estimate("", Some("2.5")), PLACEHOLDER);
        assert_eq!(estimate("   ", Some("2.5")), PLACEHOLDER);
    }

    #[test]
    fn estimate_placeholder_for_non_numeric_input() {
        assert_eq!(estimate("ten", Some("2.5")), PLACEHOLDER);
        assert_eq!(estimate("1e3", Some("2.5")), PLACEHOLDER);
    }

    #[test]
    fn estimate_placeholder_without_rate() {
        assert_eq!(estimate("10", None), PLACEHOLDER);
        assert_eq!(estimate("10", Some(PLACEHOLDER)), PLACEHOLDER);
    }

    #[test]
    fn plain_decimals_parse_exactly() {
        assert_eq!(parse_plain(".5"), Some(dec!(0.5)));
        assert_eq!(parse_plain(" 12.340 "), Some(dec!(12.34)));
        assert_eq!(parse_plain("+1"), None);
    }

    #[test]
    fn estimate_accepts_bare_point_forms() {
        assert_eq!(estimate(".5", Some("2")), "1.000000");
        assert_eq!(estimate("3.", Some("2")), "6.000000");
    }

    #[test]
    fn estimate_zero_input_is_still_shown() {
        assert_eq!(estimate("0", Some("2.5")), "0.000000");
    }

    #[test]
    fn quote_rate_by_direction() {
        let quote = Quote::new("2.5", "0.4");
        assert_eq!(quote.rate(SwapDirection::AToB), Some("2.5"));
        assert_eq!(quote.rate(SwapDirection::BToA), Some("0.4"));
        assert_eq!(Quote::default().rate(SwapDirection::AToB), None);
    }
}
