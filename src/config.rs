// ⚙️ Formatter Config - defaults as data
// Loaded from JSON so a template layer can set its house style once

use crate::date::{resolve_timezone, DEFAULT_DATE_FORMAT};
use crate::money::DEFAULT_MONEY_DECIMALS;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Pattern used by `Formatter::date` when none is passed
    #[serde(default = "default_date_format")]
    pub default_date_format: String,

    /// Decimals used by `Formatter::money` when none are passed
    #[serde(default = "default_money_decimals")]
    pub default_money_decimals: i64,

    /// Timezone used by `Formatter::date` when none is passed
    #[serde(default)]
    pub default_timezone: Option<String>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_money_decimals() -> i64 {
    DEFAULT_MONEY_DECIMALS
}

impl Default for FormatterConfig {
    fn default() -> Self {
        FormatterConfig {
            default_date_format: default_date_format(),
            default_money_decimals: default_money_decimals(),
            default_timezone: None,
        }
    }
}

impl FormatterConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read formatter config: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FormatterConfig =
            serde_json::from_str(json).context("Failed to parse formatter config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a default timezone that would make every `date` call pass through
    pub fn validate(&self) -> Result<()> {
        if let Some(tz) = &self.default_timezone {
            if resolve_timezone(tz).is_none() {
                bail!("Unknown default_timezone in formatter config: {:?}", tz);
            }
        }
        Ok(())
    }

    /// Builder pattern: set the default date pattern
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.default_date_format = format.into();
        self
    }

    /// Builder pattern: set the default money decimals
    pub fn with_money_decimals(mut self, decimals: i64) -> Self {
        self.default_money_decimals = decimals;
        self
    }

    /// Builder pattern: set the default timezone
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.default_timezone = Some(timezone.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FormatterConfig::default();
        assert_eq!(config.default_date_format, "Y-m-d 12:00:00");
        assert_eq!(config.default_money_decimals, 2);
        assert_eq!(config.default_timezone, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FormatterConfig::from_json(r#"{"default_timezone": "Europe/Paris"}"#).unwrap();
        assert_eq!(config.default_date_format, "Y-m-d 12:00:00");
        assert_eq!(config.default_money_decimals, 2);
        assert_eq!(config.default_timezone.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let err = FormatterConfig::from_json(r#"{"default_timezone": "Atlantis/Capital"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Atlantis/Capital"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(FormatterConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"default_date_format": "d/m/Y", "default_money_decimals": 0}}"#
        )
        .unwrap();

        let config = FormatterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_date_format, "d/m/Y");
        assert_eq!(config.default_money_decimals, 0);
    }

    #[test]
    fn test_missing_file() {
        let err = FormatterConfig::from_file("/nonexistent/formatter.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read formatter config"));
    }

    #[test]
    fn test_builder() {
        let config = FormatterConfig::default()
            .with_date_format("Y")
            .with_money_decimals(3)
            .with_timezone("UTC");
        assert_eq!(config.default_date_format, "Y");
        assert_eq!(config.default_money_decimals, 3);
        assert!(config.validate().is_ok());
    }
}
