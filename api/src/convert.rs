//! Derived-amount arithmetic shared by the input handlers and the explicit
//! convert action.

use crate::error::RateError;

/// Decimal places shown in derived amounts and the rate summary line.
const DISPLAY_DECIMALS: usize = 2;

fn parse_amount(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn round_display(value: f64) -> Option<String> {
    value
        .is_finite()
        .then(|| format!("{value:.prec$}", prec = DISPLAY_DECIMALS))
}

/// Recomputes the "to" amount from an edited "from" amount.
///
/// Returns `None` when the input is not a plain finite number; the caller
/// clears the derived field instead of displaying a junk value.
pub fn forward(amount_from: &str, rate: f64) -> Option<String> {
    parse_amount(amount_from).and_then(|amount| round_display(amount * rate))
}

/// Recomputes the "from" amount from an edited "to" amount.
///
/// A zero rate yields a non-finite quotient and therefore `None`.
pub fn reverse(amount_to: &str, rate: f64) -> Option<String> {
    parse_amount(amount_to).and_then(|amount| round_display(amount / rate))
}

/// Formats a raw conversion factor for the "1 FROM = X TO" summary line.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.prec$}", prec = DISPLAY_DECIMALS)
}

/// The explicit convert action.
///
/// Validates that an amount and a rate are both present before performing the
/// same computation as [`forward`].
pub fn explicit(amount_from: &str, rate: Option<f64>) -> Result<String, RateError> {
    let rate = rate.ok_or(RateError::MissingInput)?;
    forward(amount_from, rate).ok_or(RateError::MissingInput)
}
