//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Exchange rate configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "mizan=info".to_string()
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Provenance tag recorded when a rate update names no source.
    #[serde(default = "default_rate_source")]
    pub default_source: String,
    /// Overrides applied once at startup.
    #[serde(default)]
    pub seed: Vec<SeedRate>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            default_source: default_rate_source(),
            seed: Vec::new(),
        }
    }
}

fn default_rate_source() -> String {
    "manual".to_string()
}

/// A rate override supplied through configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRate {
    /// Currency code the rate applies to.
    pub code: String,
    /// Units of base currency per unit of `code`.
    pub rate: Decimal,
    /// Provenance tag; falls back to `rates.default_source`.
    #[serde(default)]
    pub source: Option<String>,
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
            .add_source(
                config::Environment::with_prefix("MIZAN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from TOML text, ignoring files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or does not match
    /// the configuration schema.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.log.filter, "mizan=info");
        assert_eq!(config.rates.default_source, "manual");
        assert!(config.rates.seed.is_empty());
    }

    #[test]
    fn test_seed_rates_parse() {
        let config = AppConfig::from_toml(
            r#"
            [rates]
            default_source = "treasury"

            [[rates.seed]]
            code = "USD"
            rate = "3.6725"

            [[rates.seed]]
            code = "KWD"
            rate = "11.952"
            source = "central-bank"
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.default_source, "treasury");
        assert_eq!(config.rates.seed.len(), 2);
        assert_eq!(config.rates.seed[0].code, "USD");
        assert_eq!(config.rates.seed[0].rate, dec!(3.6725));
        assert_eq!(config.rates.seed[0].source, None);
        assert_eq!(config.rates.seed[1].source.as_deref(), Some("central-bank"));
    }

    #[test]
    fn test_seed_rate_requires_code() {
        let result = AppConfig::from_toml(
            r#"
            [[rates.seed]]
            rate = "1.5"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_environment() {
        temp_env::with_vars(
            [
                ("MIZAN__LOG__FILTER", Some("mizan=trace")),
                ("MIZAN__RATES__DEFAULT_SOURCE", Some("feed")),
                ("RUN_MODE", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.log.filter, "mizan=trace");
                assert_eq!(config.rates.default_source, "feed");
            },
        );
    }
}
