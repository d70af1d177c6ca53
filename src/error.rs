// ⚠️ Format Errors
// The few operations that cannot fail soft report one of these

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Currency code not present in the symbol table (lookup is case-sensitive)
    #[error("unknown currency code: {0:?}")]
    UnknownCurrency(String),

    /// Input to a numeric formatter was not a number or numeric string
    #[error("not a numeric value: {0:?}")]
    NotNumeric(String),
}

pub type FormatResult<T> = Result<T, FormatError>;
