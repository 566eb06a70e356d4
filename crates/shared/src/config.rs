//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::DEFAULT_CURRENCY_LABEL;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Tax rate configuration.
    #[serde(default)]
    pub tax: TaxConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Label appended to formatted amounts.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    /// Regime code used when none is supplied.
    #[serde(default = "default_regime")]
    pub default_regime: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_label: default_currency_label(),
            default_regime: default_regime(),
        }
    }
}

fn default_currency_label() -> String {
    DEFAULT_CURRENCY_LABEL.to_string()
}

fn default_regime() -> String {
    "REEL_NORMAL".to_string()
}

/// Corporate income tax rates (CGI Art. 33 and 35).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaxConfig {
    /// Standard corporate income tax rate.
    #[serde(default = "default_is_rate")]
    pub is_rate: Decimal,
    /// Minimum flat tax (IMF) rate applied to revenue.
    #[serde(default = "default_imf_rate")]
    pub imf_rate: Decimal,
    /// IMF floor.
    #[serde(default = "default_imf_minimum")]
    pub imf_minimum: Decimal,
    /// IMF ceiling.
    #[serde(default = "default_imf_maximum")]
    pub imf_maximum: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            is_rate: default_is_rate(),
            imf_rate: default_imf_rate(),
            imf_minimum: default_imf_minimum(),
            imf_maximum: default_imf_maximum(),
        }
    }
}

fn default_is_rate() -> Decimal {
    Decimal::new(25, 2) // 25%
}

fn default_imf_rate() -> Decimal {
    Decimal::new(5, 3) // 0.5% of revenue
}

fn default_imf_minimum() -> Decimal {
    Decimal::from(3_000_000)
}

fn default_imf_maximum() -> Decimal {
    Decimal::from(35_000_000)
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "liasse=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LIASSE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
