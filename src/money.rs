// 💵 Money & Currency Formatting
// Two flavours on purpose:
// - format_money: dollar sign, truncates to cents before rendering
// - format_currency: symbol from the currency table, rounds to cents

use crate::error::{FormatError, FormatResult};
use crate::number::{floor_cents, number_format};
use crate::value::{Output, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decimal count used when the caller does not pass one
pub const DEFAULT_MONEY_DECIMALS: i64 = 2;

// ============================================================================
// CURRENCY TABLE
// ============================================================================

/// Currencies with a known symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Gbp, Currency::Eur];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
        }
    }
}

impl FromStr for Currency {
    type Err = FormatError;

    /// Exact, case-sensitive code lookup
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Symbol for a currency code, `None` when the code is not in the table
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    code.parse::<Currency>().ok().map(|c| c.symbol())
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Format a dollar amount, truncating to cents
///
/// - Non-numeric `value` or `decimals` → `Output::Unchanged(value)`;
///   NaN and infinities count as non-numeric here
/// - Integer-typed `value` always renders with 0 decimals
/// - The value is floored to 2 decimals *before* rendering, so asking for
///   more decimals never brings precision back
///
/// ```
/// use template_helpers::format_money;
///
/// assert_eq!(format_money(10.999, 2), "$10.99");
/// assert_eq!(format_money(10, 2), "$10");
/// ```
pub fn format_money(value: impl Into<Value>, decimals: impl Into<Value>) -> Output {
    let value = value.into();
    let decimals = decimals.into();

    let (amount, places) = match (value.as_finite_number(), decimals.as_finite_number()) {
        (Some(amount), Some(places)) => (amount, places),
        _ => {
            tracing::debug!(?value, ?decimals, "format_money: non-numeric input, passing through");
            return Output::Unchanged(value);
        }
    };

    let places = if value.is_int() { 0 } else { decimal_count(places) };

    Output::Formatted(format!("${}", number_format(floor_cents(amount), places)))
}

/// [`format_money`] with the default of 2 decimals
pub fn format_money_default(value: impl Into<Value>) -> Output {
    format_money(value, DEFAULT_MONEY_DECIMALS)
}

/// Format an amount in the given currency, rounded to 2 decimals
///
/// ```
/// use template_helpers::format_currency;
///
/// assert_eq!(format_currency(1234.5, "GBP").unwrap(), "£1,234.50");
/// assert!(format_currency(1.0, "JPY").is_err());
/// ```
pub fn format_currency(amount: impl Into<Value>, code: &str) -> FormatResult<String> {
    let currency = code
        .parse::<Currency>()
        .inspect_err(|_| tracing::debug!(code, "format_currency: unknown currency code"))?;

    let amount = amount.into();
    let value = amount.as_finite_number().ok_or_else(|| {
        tracing::debug!(?amount, "format_currency: non-numeric amount");
        FormatError::NotNumeric(amount.to_string())
    })?;

    Ok(format_in(currency, value))
}

/// Format an already-resolved currency amount
pub fn format_in(currency: Currency, amount: f64) -> String {
    format!("{}{}", currency.symbol(), number_format(amount, 2))
}

/// Numeric decimals argument → usize (truncated, negatives clamp to 0)
fn decimal_count(places: f64) -> usize {
    if places <= 0.0 {
        0
    } else {
        places.trunc().min(usize::MAX as f64) as usize
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_integer_forces_zero_decimals() {
        assert_eq!(format_money(10, 2), "$10");
        assert_eq!(format_money(1500, 4), "$1,500");
        assert_eq!(format_money_default(10), "$10");
    }

    #[test]
    fn test_money_truncates_not_rounds() {
        assert_eq!(format_money(10.999, 2), "$10.99");
        assert_eq!(format_money(10.999, 4), "$10.9900");
        assert_eq!(format_money_default(0.019), "$0.01");
    }

    #[test]
    fn test_money_numeric_strings_are_not_ints() {
        assert_eq!(format_money("10", 2), "$10.00");
        assert_eq!(format_money("1234.567", "2"), "$1,234.56");
    }

    #[test]
    fn test_money_zero_decimals_rounds_truncated_value() {
        assert_eq!(format_money(10.99, 0), "$11");
    }

    #[test]
    fn test_money_negative_amount() {
        assert_eq!(format_money(-10.991, 2), "$-11.00");
        assert_eq!(format_money(2.5, -1), "$3");
    }

    #[test]
    fn test_money_passthrough() {
        assert_eq!(
            format_money_default("abc"),
            Output::Unchanged(Value::from("abc"))
        );
        assert_eq!(format_money(12.5, "two"), Output::Unchanged(Value::from(12.5)));
    }

    #[test]
    fn test_money_non_finite_passthrough() {
        match format_money(f64::NAN, 2) {
            Output::Unchanged(Value::Float(f)) => assert!(f.is_nan()),
            other => panic!("expected NaN passthrough, got {:?}", other),
        }
        assert_eq!(
            format_money(f64::INFINITY, 2),
            Output::Unchanged(Value::Float(f64::INFINITY))
        );
        assert_eq!(format_money(10.5, f64::NAN), Output::Unchanged(Value::Float(10.5)));
    }

    #[test]
    fn test_currency_table() {
        assert_eq!(currency_symbol("USD"), Some("$"));
        assert_eq!(currency_symbol("GBP"), Some("£"));
        assert_eq!(currency_symbol("EUR"), Some("€"));
        assert_eq!(currency_symbol("eur"), None);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(Currency::Gbp.to_string(), "GBP");
    }

    #[test]
    fn test_currency_rounding_boundaries() {
        assert_eq!(format_currency(10.005, "EUR").unwrap(), "€10.01");
        assert_eq!(format_currency(10.004, "EUR").unwrap(), "€10.00");
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(1234567.891, "USD").unwrap(), "$1,234,567.89");
        assert_eq!(format_currency(5, "GBP").unwrap(), "£5.00");
        assert_eq!(format_currency("19.999", "USD").unwrap(), "$20.00");
    }

    #[test]
    fn test_currency_errors() {
        assert_eq!(
            format_currency(10.0, "JPY"),
            Err(FormatError::UnknownCurrency("JPY".to_string()))
        );
        assert_eq!(
            format_currency("lots", "USD"),
            Err(FormatError::NotNumeric("lots".to_string()))
        );
        assert_eq!(
            format_currency(f64::NEG_INFINITY, "USD"),
            Err(FormatError::NotNumeric("-INF".to_string()))
        );
    }
}
