// Template Helpers - Core Library
// Formatting helpers for template rendering: months, yes/no, money,
// currency, dates, unit pluralization and spoken lists

pub mod value;
pub mod number;
pub mod money;
pub mod date;
pub mod text;
pub mod config;
pub mod formatter;
pub mod error;

// Re-export commonly used types
pub use value::{Value, Output, is_numeric_str};
pub use money::{
    Currency, DEFAULT_MONEY_DECIMALS,
    format_money, format_money_default, format_currency, currency_symbol,
};
pub use date::{
    Zone, DEFAULT_DATE_FORMAT,
    format_date, format_date_default, format_date_at,
    parse_datetime, parse_datetime_at, resolve_timezone, render_pattern,
};
pub use text::{format_months, format_yes_no, pluralize_unit, join_as_list};
pub use config::FormatterConfig;
pub use formatter::Formatter;
pub use error::{FormatError, FormatResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
