//! Currency registry.
//!
//! The registry is an immutable table built once at startup. Exactly one
//! entry, the base currency, has a rate of 1; every conversion pivots
//! through it.

use std::collections::HashMap;

use mizan_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CurrencyError, CurrencyResult};

/// Largest number of fractional digits a currency may declare.
pub const MAX_DECIMALS: u32 = 8;

/// A currency known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Unique code, primary key of the registry.
    pub code: CurrencyCode,
    /// Human-readable name.
    pub name: String,
    /// Display glyph; never used in arithmetic.
    pub symbol: String,
    /// Fractional digits used when formatting amounts.
    pub decimals: u32,
    /// Default rate: amount × `rate_to_base` = amount in base currency.
    pub rate_to_base: Decimal,
}

impl Currency {
    /// Creates a currency entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCode` if `code` is not a canonical currency code.
    pub fn new(
        code: &str,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u32,
        rate_to_base: Decimal,
    ) -> CurrencyResult<Self> {
        let code =
            CurrencyCode::new(code).map_err(|e| CurrencyError::InvalidCode(e.0))?;
        Ok(Self {
            code,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            rate_to_base,
        })
    }

    /// Returns true if this is a base currency entry (rate exactly 1).
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.rate_to_base == Decimal::ONE
    }
}

/// Built-in table: (code, name, symbol, decimals, rate to AED as mantissa and scale).
const BUILTIN: &[(&str, &str, &str, u32, (i64, u32))] = &[
    ("AED", "UAE Dirham", "د.إ", 2, (1, 0)),
    ("USD", "US Dollar", "$", 2, (367, 2)),
    ("EUR", "Euro", "€", 2, (402, 2)),
    ("GBP", "British Pound", "£", 2, (465, 2)),
    ("SAR", "Saudi Riyal", "﷼", 2, (98, 2)),
    ("KWD", "Kuwaiti Dinar", "د.ك", 3, (1195, 2)),
    ("BHD", "Bahraini Dinar", ".د.ب", 3, (974, 2)),
    ("OMR", "Omani Rial", "ر.ع.", 3, (954, 2)),
    ("QAR", "Qatari Riyal", "ر.ق", 2, (101, 2)),
    ("JPY", "Japanese Yen", "¥", 0, (25, 3)),
    ("CHF", "Swiss Franc", "CHF", 2, (415, 2)),
    ("CNY", "Chinese Yuan", "CN¥", 2, (51, 2)),
    ("INR", "Indian Rupee", "₹", 2, (44, 3)),
    ("KRW", "South Korean Won", "₩", 0, (27, 4)),
];

/// Immutable table of known currencies in insertion order.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: Vec<Currency>,
    index: HashMap<CurrencyCode, usize>,
    base: usize,
}

impl CurrencyRegistry {
    /// Builds a registry, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegistry` if the table is empty, repeats a code,
    /// has a non-positive rate, declares more than [`MAX_DECIMALS`]
    /// decimals, or does not have exactly one base currency.
    pub fn new(currencies: Vec<Currency>) -> CurrencyResult<Self> {
        if currencies.is_empty() {
            return Err(CurrencyError::InvalidRegistry(
                "registry must contain at least one currency".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(currencies.len());
        let mut bases = Vec::new();

        for (position, currency) in currencies.iter().enumerate() {
            if currency.rate_to_base <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRegistry(format!(
                    "{} has non-positive rate {}",
                    currency.code, currency.rate_to_base
                )));
            }
            if currency.decimals > MAX_DECIMALS {
                return Err(CurrencyError::InvalidRegistry(format!(
                    "{} declares {} decimals (max {MAX_DECIMALS})",
                    currency.code, currency.decimals
                )));
            }
            if index.insert(currency.code.clone(), position).is_some() {
                return Err(CurrencyError::InvalidRegistry(format!(
                    "duplicate currency code {}",
                    currency.code
                )));
            }
            if currency.is_base() {
                bases.push(position);
            }
        }

        let base = match bases.as_slice() {
            [single] => *single,
            [] => {
                return Err(CurrencyError::InvalidRegistry(
                    "no base currency (rate 1) defined".to_string(),
                ));
            }
            _ => {
                let codes: Vec<&str> = bases
                    .iter()
                    .map(|&i| currencies[i].code.as_str())
                    .collect();
                return Err(CurrencyError::InvalidRegistry(format!(
                    "multiple base currencies: {}",
                    codes.join(", ")
                )));
            }
        };

        Ok(Self {
            currencies,
            index,
            base,
        })
    }

    /// Builds the built-in registry with the UAE dirham as base currency.
    pub fn builtin() -> CurrencyResult<Self> {
        let currencies = BUILTIN
            .iter()
            .map(|&(code, name, symbol, decimals, (mantissa, scale))| {
                Currency::new(code, name, symbol, decimals, Decimal::new(mantissa, scale))
            })
            .collect::<CurrencyResult<Vec<_>>>()?;
        Self::new(currencies)
    }

    /// Looks up a currency by exact code.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Currency> {
        self.index.get(code).map(|&i| &self.currencies[i])
    }

    /// Returns all currencies in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Currency] {
        &self.currencies
    }

    /// Returns true if the registry has an entry for `code`.
    #[must_use]
    pub fn is_known(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the base currency.
    #[must_use]
    pub fn base(&self) -> &Currency {
        &self.currencies[self.base]
    }

    /// Returns the number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Always false for a constructed registry; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
