//! Mizan rate sheet
//!
//! Composition root for the currency services: loads configuration, applies
//! seeded rate overrides and prints the effective rate of every currency.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mizan_core::currency::{
    CurrencyConverter, CurrencyRegistry, ExchangeRateManager, MAJOR, MembershipSet, REGIONAL_BLOC,
    RateOrigin, options_for,
};
use mizan_shared::AppConfig;
use mizan_shared::config::RatesConfig;

/// Amount converted into the base currency on each sheet row.
const SAMPLE_AMOUNT: Decimal = Decimal::ONE_THOUSAND;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let converter = build_converter(&config.rates)?;
    info!(
        base = %converter.registry().base().code,
        currencies = converter.registry().len(),
        overrides = converter.rates().override_count(),
        "Currency services ready"
    );

    for line in rate_sheet(&converter) {
        println!("{line}");
    }
    for set in [&REGIONAL_BLOC, &MAJOR] {
        println!("{}", group_line(&converter, set));
    }

    Ok(())
}

/// Builds the registry, the override store and the converter, then applies
/// the configured seed rates.
fn build_converter(rates_config: &RatesConfig) -> anyhow::Result<CurrencyConverter> {
    let registry = Arc::new(CurrencyRegistry::builtin()?);
    let rates = Arc::new(ExchangeRateManager::with_default_source(
        registry,
        rates_config.default_source.as_str(),
    ));

    for seed in &rates_config.seed {
        let source = seed.source.as_deref().unwrap_or(rates.default_source());
        match rates.update_rate_with_source(&seed.code, seed.rate, source) {
            Ok(stored) => debug!(
                code = %stored.currency_code,
                rate = %stored.rate_to_base,
                source,
                "Seed rate applied"
            ),
            Err(e) => {
                warn!(code = %seed.code, rate = %seed.rate, source, error = %e, "Seed rate rejected");
                return Err(e).with_context(|| format!("Invalid seed rate for '{}'", seed.code));
            }
        }
    }

    Ok(CurrencyConverter::new(rates))
}

/// One line per registry currency, then one per staged override the
/// registry does not know.
fn rate_sheet(converter: &CurrencyConverter) -> Vec<String> {
    let registry = converter.registry();
    let base = &registry.base().code;

    let mut lines = vec![format!(
        "{:<6} {:>14}  {:<24} {SAMPLE_AMOUNT} units in {base}",
        "CODE", "RATE", "SOURCE"
    )];

    for currency in registry.all() {
        let code = currency.code.as_str();
        let Ok(effective) = converter.rates().effective_rate(code) else {
            continue;
        };
        let source = match &effective.origin {
            RateOrigin::Override { source, .. } => source.as_str(),
            RateOrigin::RegistryDefault => "default",
        };
        let sample = converter
            .convert_to_base(SAMPLE_AMOUNT, code)
            .map_or_else(|e| e.to_string(), |v| converter.format_amount(v, base.as_str()));
        lines.push(format!(
            "{code:<6} {:>14}  {source:<24} {sample}",
            effective.rate
        ));
    }

    for staged in converter
        .rates()
        .get_all_rates()
        .into_iter()
        .filter(|o| !registry.is_known(o.currency_code.as_str()))
    {
        lines.push(format!(
            "{:<6} {:>14}  {:<24} (staged)",
            staged.currency_code, staged.rate_to_base, staged.source
        ));
    }

    lines
}

fn group_line(converter: &CurrencyConverter, set: &MembershipSet) -> String {
    let labels: Vec<String> = options_for(converter.registry(), set)
        .into_iter()
        .map(|option| option.label)
        .collect();
    format!("{}: {}", set.name, labels.join(", "))
}
