//! Property-based tests for currency conversion and formatting.
//!
//! - Identity: same-code conversion returns the amount exactly
//! - Pivot round-trip stays within a tight relative tolerance
//! - Base currency conversion is the identity
//! - Formatting renders exactly the currency's decimals
//! - Overrides take precedence over registry defaults

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::converter::CurrencyConverter;
use super::error::CurrencyError;
use super::rates::ExchangeRateManager;
use super::registry::CurrencyRegistry;

const CODES: &[&str] = &[
    "AED", "USD", "EUR", "GBP", "SAR", "KWD", "BHD", "OMR", "QAR", "JPY", "CHF", "CNY", "INR",
    "KRW",
];

fn converter() -> CurrencyConverter {
    let registry = Arc::new(CurrencyRegistry::builtin().expect("builtin registry"));
    CurrencyConverter::new(Arc::new(ExchangeRateManager::new(registry)))
}

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate signed amounts with up to 6 decimals.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn known_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES)
}

fn any_code() -> impl Strategy<Value = String> {
    prop_oneof![
        known_code().prop_map(str::to_string),
        "[A-Z]{3}",
    ]
}

fn fraction_digits(formatted: &str) -> usize {
    let number = formatted.split_once(' ').map_or(formatted, |(_, n)| n);
    number.split_once('.').map_or(0, |(_, f)| f.len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount and code, converting to the same code SHALL return
    /// the amount exactly, known code or not.
    #[test]
    fn prop_same_code_is_identity(
        amount in any_amount(),
        code in any_code(),
    ) {
        let converter = converter();
        prop_assert_eq!(converter.convert(amount, &code, &code), Ok(amount));
    }

    /// *For any* two distinct known codes, converting there and back SHALL
    /// return the amount within a relative tolerance of 1e-20.
    #[test]
    fn prop_pivot_round_trip(
        amount in positive_amount(),
        from in known_code(),
        to in known_code(),
    ) {
        prop_assume!(from != to);
        let converter = converter();

        let there = converter.convert(amount, from, to).unwrap();
        let back = converter.convert(there, to, from).unwrap();

        let tolerance = amount * Decimal::new(1, 20);
        prop_assert!(
            (back - amount).abs() <= tolerance,
            "{} {} -> {} {} -> {} {}",
            amount, from, there, to, back, from
        );
    }

    /// *For any* amount, conversion into the base currency from the base
    /// currency SHALL be the identity.
    #[test]
    fn prop_base_conversion_is_identity(amount in any_amount()) {
        let converter = converter();
        let base = converter.registry().base().code.clone();
        prop_assert_eq!(base.as_str(), "AED");
        prop_assert_eq!(converter.registry().base().rate_to_base, Decimal::ONE);
        prop_assert_eq!(converter.convert_to_base(amount, base.as_str()), Ok(amount));
        prop_assert_eq!(converter.convert_from_base(amount, base.as_str()), Ok(amount));
    }

    /// *For any* amount and known code, the formatted amount SHALL carry
    /// exactly the currency's decimals.
    #[test]
    fn prop_format_renders_currency_decimals(
        amount in any_amount(),
        code in known_code(),
    ) {
        let converter = converter();
        let decimals = converter.registry().lookup(code).unwrap().decimals as usize;
        let formatted = converter.format_amount(amount, code);
        prop_assert_eq!(fraction_digits(&formatted), decimals, "{}", formatted);
    }

    /// *For any* positive rate written for a non-base code, the effective
    /// rate SHALL be that rate and the last update SHALL be recorded.
    #[test]
    fn prop_override_takes_precedence(
        rate in positive_rate(),
        code in known_code(),
    ) {
        prop_assume!(code != "AED");
        let converter = converter();
        converter.rates().update_rate(code, rate).unwrap();

        prop_assert_eq!(converter.rates().get_rate(code), Ok(rate));
        prop_assert!(converter.rates().get_last_update(code).is_some());
        prop_assert_eq!(converter.convert_to_base(Decimal::ONE, code), Ok(rate));
    }

    /// *For any* amount, an unknown code SHALL fail conversion but still
    /// format with two decimals and the raw code.
    #[test]
    fn prop_unknown_strict_convert_lenient_format(amount in positive_amount()) {
        let converter = converter();
        prop_assert_eq!(
            converter.convert(amount, "ZZZ", "AED"),
            Err(CurrencyError::UnknownCurrency("ZZZ".to_string()))
        );

        let formatted = converter.format_amount(amount, "ZZZ");
        prop_assert!(formatted.ends_with(" ZZZ"));
        prop_assert_eq!(fraction_digits(formatted.trim_end_matches(" ZZZ")), 2);
    }
}
