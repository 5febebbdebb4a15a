//! Amount rendering.
//!
//! Known currencies render as `"<symbol> <amount>"` with exactly the
//! currency's decimals. Unknown codes do not fail: they render with
//! [`FALLBACK_DECIMALS`] followed by the raw code (`"1,234.50 ZZZ"`).

use rust_decimal::Decimal;

use super::registry::CurrencyRegistry;
use super::rounding::round_bankers;

/// Decimals used for codes the registry does not know.
pub const FALLBACK_DECIMALS: u32 = 2;

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

/// Formats `amount` in currency `code`.
#[must_use]
pub fn format_amount(registry: &CurrencyRegistry, amount: Decimal, code: &str) -> String {
    match registry.lookup(code) {
        Some(currency) => format!(
            "{} {}",
            currency.symbol,
            format_number(amount, currency.decimals)
        ),
        None => format!("{} {code}", format_number(amount, FALLBACK_DECIMALS)),
    }
}

/// Formats `code` as `"<CODE> - <Name>"`, or the bare code if unknown.
#[must_use]
pub fn display_name(registry: &CurrencyRegistry, code: &str) -> String {
    registry.lookup(code).map_or_else(
        || code.to_string(),
        |currency| format!("{} - {}", currency.code, currency.name),
    )
}

/// Renders a number with grouping separators and exactly `decimals`
/// fractional digits, using banker's rounding.
///
/// Trailing zeros are padded in text: near [`Decimal::MAX`] the value
/// cannot carry the full scale itself.
#[must_use]
pub fn format_number(amount: Decimal, decimals: u32) -> String {
    let rounded = round_bankers(amount, decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let width = decimals as usize;

    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE + width + 2);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, integer);
    if width > 0 {
        out.push('.');
        out.push_str(fraction);
        out.extend(std::iter::repeat_n('0', width.saturating_sub(fraction.len())));
    }
    out
}

fn push_grouped(out: &mut String, integer: &str) {
    let len = integer.len();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
}
