// 🧰 Formatter - one object, one method per helper
// Thin facade over the free functions that fills in configured defaults

use crate::config::FormatterConfig;
use crate::date::format_date;
use crate::error::FormatResult;
use crate::money::{format_currency, format_money};
use crate::text::{format_months, format_yes_no, join_as_list, pluralize_unit};
use crate::value::{Output, Value};

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    /// Formatter with the stock defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatterConfig) -> Self {
        Formatter { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn months(&self, period: impl Into<Value>) -> String {
        format_months(period)
    }

    pub fn yes_no(&self, value: impl Into<Value>) -> &'static str {
        format_yes_no(value)
    }

    /// Money with explicit decimals, or the configured default on `None`
    pub fn money(&self, value: impl Into<Value>, decimals: Option<Value>) -> Output {
        match decimals {
            Some(decimals) => format_money(value, decimals),
            None => format_money(value, self.config.default_money_decimals),
        }
    }

    /// Date with optional pattern/timezone, configured defaults otherwise
    pub fn date(&self, data: &str, format: Option<&str>, timezone: Option<&str>) -> String {
        let format = format.unwrap_or(&self.config.default_date_format);
        let timezone = timezone.or(self.config.default_timezone.as_deref());
        format_date(data, format, timezone)
    }

    pub fn pluralize(&self, data: impl Into<Value>, unit: &str) -> Output {
        pluralize_unit(data, unit)
    }

    pub fn list<S: AsRef<str>>(&self, items: &[S]) -> String {
        join_as_list(items)
    }

    pub fn currency(&self, amount: impl Into<Value>, code: &str) -> FormatResult<String> {
        format_currency(amount, code)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn test_stock_defaults() {
        let f = Formatter::new();

        assert_eq!(f.months(1), "1 month");
        assert_eq!(f.yes_no("no"), "No");
        assert_eq!(f.money(10.999, None), "$10.99");
        assert_eq!(f.money(10.999, Some(Value::from(1))), "$11.0");
        assert_eq!(f.date("2023-01-01T13:00:00", None, None), "2023-01-01 12:00:00");
        assert_eq!(f.pluralize(3, "night"), "3 nights");
        assert_eq!(f.list(&["tea", "coffee"]), "tea and coffee");
        assert_eq!(f.currency(10.005, "EUR").unwrap(), "€10.01");
    }

    #[test]
    fn test_configured_defaults() {
        let config = FormatterConfig::default()
            .with_date_format("d/m/Y H:i")
            .with_money_decimals(0)
            .with_timezone("Asia/Tokyo");
        let f = Formatter::with_config(config);

        assert_eq!(f.money(1234.99, None), "$1,235");
        assert_eq!(f.date("2023-01-01T20:00:00Z", None, None), "02/01/2023 05:00");
        assert_eq!(f.date("2023-01-01T20:00:00Z", Some("Y-m-d"), Some("UTC")), "2023-01-01");
    }

    #[test]
    fn test_fail_soft_paths() {
        let f = Formatter::new();

        assert_eq!(f.money("n/a", None), Output::Unchanged(Value::from("n/a")));
        assert_eq!(f.date("soon", None, None), "soon");
        assert_eq!(f.list::<&str>(&[]), "");
        assert_eq!(
            f.currency(1, "XYZ"),
            Err(FormatError::UnknownCurrency("XYZ".to_string()))
        );
    }
}
