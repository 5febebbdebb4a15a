//! Currency conversion through the base currency.
//!
//! Every cross-currency conversion pivots through the base currency:
//! `from → base → to`. There is no direct cross-rate table. Results are
//! left unrounded; use [`CurrencyConverter::convert_rounded`] or the
//! formatting functions when a settled amount is needed.

use std::sync::Arc;

use mizan_shared::{CurrencyCode, Money};
use rust_decimal::Decimal;

use super::error::{CurrencyError, CurrencyResult};
use super::format::{self, FALLBACK_DECIMALS};
use super::rates::ExchangeRateManager;
use super::registry::CurrencyRegistry;
use super::rounding::round_bankers;

/// Converts and formats amounts using the current effective rates.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: Arc<ExchangeRateManager>,
}

impl CurrencyConverter {
    /// Creates a converter reading rates from `rates`.
    #[must_use]
    pub const fn new(rates: Arc<ExchangeRateManager>) -> Self {
        Self { rates }
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &CurrencyRegistry {
        self.rates.registry()
    }

    /// Returns the rate store.
    #[must_use]
    pub fn rates(&self) -> &ExchangeRateManager {
        &self.rates
    }

    /// Converts `amount` of `from` into the base currency.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if `from` has no override and no registry entry.
    pub fn convert_to_base(&self, amount: Decimal, from: &str) -> CurrencyResult<Decimal> {
        let rate = self.rates.get_rate(from)?;
        amount.checked_mul(rate).ok_or_else(|| CurrencyError::Overflow {
            amount,
            code: from.to_string(),
        })
    }

    /// Converts `amount` of base currency into `to`.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if `to` has no override and no registry entry.
    pub fn convert_from_base(&self, amount: Decimal, to: &str) -> CurrencyResult<Decimal> {
        let rate = self.rates.get_rate(to)?;
        amount.checked_div(rate).ok_or_else(|| CurrencyError::Overflow {
            amount,
            code: to.to_string(),
        })
    }

    /// Converts `amount` from `from` to `to` via the base currency.
    ///
    /// Identical codes return `amount` untouched without any rate lookup.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if either side cannot be resolved.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> CurrencyResult<Decimal> {
        if from == to {
            return Ok(amount);
        }
        let base = self.convert_to_base(amount, from)?;
        self.convert_from_base(base, to)
    }

    /// Converts and rounds to the target currency's decimals with banker's
    /// rounding.
    ///
    /// Codes resolved only through an override round to
    /// [`FALLBACK_DECIMALS`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::convert`].
    pub fn convert_rounded(&self, amount: Decimal, from: &str, to: &str) -> CurrencyResult<Decimal> {
        let converted = self.convert(amount, from, to)?;
        Ok(round_bankers(converted, self.decimals_for(to)))
    }

    /// Converts a [`Money`] value into `to`.
    ///
    /// # Errors
    ///
    /// `InvalidCode` if `to` is malformed; otherwise as [`Self::convert`].
    pub fn convert_money(&self, money: &Money, to: &str) -> CurrencyResult<Money> {
        let target = CurrencyCode::new(to).map_err(|e| CurrencyError::InvalidCode(e.0))?;
        let amount = self.convert(money.amount, money.currency.as_str(), to)?;
        Ok(Money::new(amount, target))
    }

    /// Units of `to` per unit of `from`, derived through the base currency.
    ///
    /// # Errors
    ///
    /// `UnknownCurrency` if either side cannot be resolved.
    pub fn cross_rate(&self, from: &str, to: &str) -> CurrencyResult<Decimal> {
        self.convert(Decimal::ONE, from, to)
    }

    /// Formats `amount` in `code`. Never fails; see [`format::format_amount`].
    #[must_use]
    pub fn format_amount(&self, amount: Decimal, code: &str) -> String {
        format::format_amount(self.registry(), amount, code)
    }

    /// Returns `"<CODE> - <Name>"`, or the bare code if unknown.
    #[must_use]
    pub fn display_name(&self, code: &str) -> String {
        format::display_name(self.registry(), code)
    }

    fn decimals_for(&self, code: &str) -> u32 {
        self.registry()
            .lookup(code)
            .map_or(FALLBACK_DECIMALS, |currency| currency.decimals)
    }
}
