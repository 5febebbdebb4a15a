//! Runtime exchange rate overrides.
//!
//! An [`ExchangeRateManager`] is built by the application's composition root
//! and shared by handle. Overrides supersede the registry's default rate for
//! their code until overwritten; no history is retained.
//!
//! Each override is stored as one value in a sharded concurrent map, so a
//! write replaces all of its fields at once and a read clones a complete
//! value. Readers never observe a half-written override.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use mizan_shared::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::error::{CurrencyError, CurrencyResult};
use super::registry::CurrencyRegistry;

/// Source tag used when a write names none.
pub const DEFAULT_RATE_SOURCE: &str = "manual";

/// A runtime rate that supersedes the registry default for one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateOverride {
    /// Currency the rate applies to; need not exist in the registry.
    pub currency_code: CurrencyCode,
    /// Units of base currency per unit of this currency.
    pub rate_to_base: Decimal,
    /// Time of the most recent write.
    pub last_updated: DateTime<Utc>,
    /// Free-text provenance (e.g. "manual", a feed name).
    pub source: String,
}

/// Where an effective rate came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateOrigin {
    /// A runtime override.
    Override {
        /// Provenance of the override.
        source: String,
        /// When the override was written.
        last_updated: DateTime<Utc>,
    },
    /// The registry's default rate.
    RegistryDefault,
}

/// The rate actually used for a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveRate {
    /// Currency code.
    pub code: CurrencyCode,
    /// Units of base currency per unit of `code`.
    pub rate: Decimal,
    /// Override or registry default.
    pub origin: RateOrigin,
}

impl EffectiveRate {
    /// Returns true if the rate comes from an override.
    #[must_use]
    pub fn is_override(&self) -> bool {
        matches!(self.origin, RateOrigin::Override { .. })
    }
}

/// Override store consulted before the registry's default rates.
#[derive(Debug)]
pub struct ExchangeRateManager {
    registry: Arc<CurrencyRegistry>,
    overrides: DashMap<CurrencyCode, RateOverride>,
    default_source: String,
}

impl ExchangeRateManager {
    /// Creates an empty store over `registry`, tagging unsourced writes
    /// with [`DEFAULT_RATE_SOURCE`].
    #[must_use]
    pub fn new(registry: Arc<CurrencyRegistry>) -> Self {
        Self::with_default_source(registry, DEFAULT_RATE_SOURCE)
    }

    /// Creates an empty store with a custom default source tag.
    #[must_use]
    pub fn with_default_source(
        registry: Arc<CurrencyRegistry>,
        default_source: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            overrides: DashMap::new(),
            default_source: default_source.into(),
        }
    }

    /// Returns the registry backing default rates.
    #[must_use]
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Returns the source tag applied by [`Self::update_rate`].
    #[must_use]
    pub fn default_source(&self) -> &str {
        &self.default_source
    }

    /// Stores or overwrites the override for `code` with the default source.
    ///
    /// The code need not exist in the registry, so rates can be staged for
    /// currencies added later.
    ///
    /// The base currency is the one exception to override precedence: its
    /// rate stays fixed at 1, so `convert_to_base(amount, base)` always
    /// returns `amount`. Writing 1 for the base is accepted; any other rate
    /// is rejected.
    ///
    /// # Errors
    ///
    /// - `InvalidCode` if `code` is not a canonical currency code
    /// - `InvalidRate` if `rate` is zero or negative
    /// - `BaseRateOverride` if `code` is the base currency and `rate` is not 1
    pub fn update_rate(&self, code: &str, rate: Decimal) -> CurrencyResult<RateOverride> {
        self.update_rate_with_source(code, rate, &self.default_source)
    }

    /// Stores or overwrites the override for `code`, recording `source`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_rate`].
    pub fn update_rate_with_source(
        &self,
        code: &str,
        rate: Decimal,
        source: &str,
    ) -> CurrencyResult<RateOverride> {
        let currency_code = self.validate_write(code, rate)?;

        let entry = RateOverride {
            currency_code: currency_code.clone(),
            rate_to_base: rate,
            last_updated: Utc::now(),
            source: source.to_string(),
        };
        self.overrides.insert(currency_code, entry.clone());
        Ok(entry)
    }

    /// Stores an override supplied as a binary float, e.g. from a rate feed.
    ///
    /// # Errors
    ///
    /// `InvalidRate` for NaN or infinite values; otherwise as
    /// [`Self::update_rate`].
    pub fn update_rate_from_f64(
        &self,
        code: &str,
        rate: f64,
        source: &str,
    ) -> CurrencyResult<RateOverride> {
        let Some(decimal) = rate.is_finite().then(|| Decimal::from_f64(rate)).flatten() else {
            return Err(CurrencyError::InvalidRate {
                code: code.to_string(),
                rate: rate.to_string(),
            });
        };
        self.update_rate_with_source(code, decimal, source)
    }

    fn validate_write(&self, code: &str, rate: Decimal) -> CurrencyResult<CurrencyCode> {
        let currency_code =
            CurrencyCode::new(code).map_err(|e| CurrencyError::InvalidCode(e.0))?;

        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate {
                code: code.to_string(),
                rate: rate.to_string(),
            });
        }

        if self.registry.base().code == currency_code && rate != Decimal::ONE {
            return Err(CurrencyError::BaseRateOverride {
                code: code.to_string(),
                rate,
            });
        }

        Ok(currency_code)
    }

    /// Resolves the rate for `code`: override first, then registry default.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if neither exists.
    pub fn effective_rate(&self, code: &str) -> CurrencyResult<EffectiveRate> {
        if let Some(entry) = self.overrides.get(code) {
            let entry = entry.value();
            return Ok(EffectiveRate {
                code: entry.currency_code.clone(),
                rate: entry.rate_to_base,
                origin: RateOrigin::Override {
                    source: entry.source.clone(),
                    last_updated: entry.last_updated,
                },
            });
        }

        self.registry
            .lookup(code)
            .map(|currency| EffectiveRate {
                code: currency.code.clone(),
                rate: currency.rate_to_base,
                origin: RateOrigin::RegistryDefault,
            })
            .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
    }

    /// Returns the effective rate for `code`.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if neither an override nor a registry entry exists.
    pub fn get_rate(&self, code: &str) -> CurrencyResult<Decimal> {
        self.effective_rate(code).map(|effective| effective.rate)
    }

    /// Returns the time of the last override write for `code`, if any.
    #[must_use]
    pub fn get_last_update(&self, code: &str) -> Option<DateTime<Utc>> {
        self.overrides.get(code).map(|entry| entry.last_updated)
    }

    /// Returns a snapshot of current overrides, sorted by code.
    ///
    /// Registry defaults are not included.
    #[must_use]
    pub fn get_all_rates(&self) -> Vec<RateOverride> {
        let mut rates: Vec<RateOverride> = self
            .overrides
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rates.sort_by(|a, b| a.currency_code.cmp(&b.currency_code));
        rates
    }

    /// Returns the number of stored overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
