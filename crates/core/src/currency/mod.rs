//! Multi-currency registry, conversion and exchange rate overrides.
//!
//! - `registry` - Immutable table of known currencies and default rates
//! - `rates` - Runtime rate overrides consulted before registry defaults
//! - `converter` - Pivot conversion through the base currency
//! - `format` - Amount and display-name rendering
//! - `selection` - Option lists for currency pickers
//! - `rounding` - Banker's rounding helpers

pub mod converter;
pub mod error;
pub mod format;
pub mod rates;
pub mod registry;
pub mod rounding;
pub mod selection;

#[cfg(test)]
mod converter_props;

pub use converter::CurrencyConverter;
pub use error::{CurrencyError, CurrencyResult};
pub use format::{display_name, format_amount};
pub use rates::{DEFAULT_RATE_SOURCE, EffectiveRate, ExchangeRateManager, RateOrigin, RateOverride};
pub use registry::{Currency, CurrencyRegistry};
pub use selection::{CurrencyOption, MAJOR, MembershipSet, REGIONAL_BLOC, all_options, options_for};
