//! Core currency logic for Mizan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It owns the currency registry, pivot conversion, runtime rate overrides,
//! and amount formatting. Application code builds one [`currency::CurrencyRegistry`],
//! one [`currency::ExchangeRateManager`] over it, and shares a
//! [`currency::CurrencyConverter`] with request handlers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use mizan_core::currency::{CurrencyConverter, CurrencyRegistry, ExchangeRateManager};
//!
//! let registry = Arc::new(CurrencyRegistry::builtin().unwrap());
//! let rates = Arc::new(ExchangeRateManager::new(registry));
//! let converter = CurrencyConverter::new(Arc::clone(&rates));
//!
//! assert_eq!(converter.convert(dec!(1000), "USD", "AED").unwrap(), dec!(3670));
//!
//! rates.update_rate("USD", dec!(3.70)).unwrap();
//! assert_eq!(converter.convert(dec!(1000), "USD", "AED").unwrap(), dec!(3700));
//! ```

pub mod currency;
