//! Read-only currency option lists for pickers.

use mizan_shared::CurrencyCode;
use serde::Serialize;

use super::format::display_name;
use super::registry::{Currency, CurrencyRegistry};

/// One selectable currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOption {
    /// Currency code.
    pub code: CurrencyCode,
    /// `"<CODE> - <Name>"`.
    pub label: String,
    /// Display glyph.
    pub symbol: String,
}

/// A named, static group of currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipSet {
    /// Group name.
    pub name: &'static str,
    /// Member codes; order is irrelevant, output follows the registry.
    pub codes: &'static [&'static str],
}

impl MembershipSet {
    /// Returns true if `code` belongs to the set.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|member| *member == code)
    }
}

/// Gulf Cooperation Council currencies.
pub const REGIONAL_BLOC: MembershipSet = MembershipSet {
    name: "GCC",
    codes: &["AED", "SAR", "KWD", "BHD", "OMR", "QAR"],
};

/// Major trading currencies.
pub const MAJOR: MembershipSet = MembershipSet {
    name: "Major",
    codes: &["USD", "EUR", "GBP", "JPY", "CHF", "CNY", "INR"],
};

fn option_for(registry: &CurrencyRegistry, currency: &Currency) -> CurrencyOption {
    CurrencyOption {
        code: currency.code.clone(),
        label: display_name(registry, currency.code.as_str()),
        symbol: currency.symbol.clone(),
    }
}

/// All registry currencies, in registry order.
#[must_use]
pub fn all_options(registry: &CurrencyRegistry) -> Vec<CurrencyOption> {
    registry
        .all()
        .iter()
        .map(|currency| option_for(registry, currency))
        .collect()
}

/// Registry currencies that belong to `set`, in registry order.
///
/// Codes in the set that the registry does not know are skipped.
#[must_use]
pub fn options_for(registry: &CurrencyRegistry, set: &MembershipSet) -> Vec<CurrencyOption> {
    registry
        .all()
        .iter()
        .filter(|currency| set.contains(currency.code.as_str()))
        .map(|currency| option_for(registry, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(options: &[CurrencyOption]) -> Vec<&str> {
        options.iter().map(|o| o.code.as_str()).collect()
    }

    #[test]
    fn test_all_options_follow_registry() {
        let registry = CurrencyRegistry::builtin().unwrap();
        let options = all_options(&registry);
        assert_eq!(options.len(), registry.len());

        let expected: Vec<&str> = registry.all().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes(&options), expected);

        let usd = options.iter().find(|o| o.code == "USD").unwrap();
        assert_eq!(usd.label, "USD - US Dollar");
        assert_eq!(usd.symbol, "$");
    }

    #[test]
    fn test_regional_bloc_in_registry_order() {
        let registry = CurrencyRegistry::builtin().unwrap();
        let options = options_for(&registry, &REGIONAL_BLOC);
        assert_eq!(codes(&options), ["AED", "SAR", "KWD", "BHD", "OMR", "QAR"]);
    }

    #[test]
    fn test_major_in_registry_order() {
        let registry = CurrencyRegistry::builtin().unwrap();
        let options = options_for(&registry, &MAJOR);
        assert_eq!(codes(&options), ["USD", "EUR", "GBP", "JPY", "CHF", "CNY", "INR"]);
    }

    #[test]
    fn test_unknown_members_are_skipped() {
        let registry = CurrencyRegistry::builtin().unwrap();
        let set = MembershipSet {
            name: "test",
            codes: &["ZZZ", "EUR"],
        };
        assert_eq!(codes(&options_for(&registry, &set)), ["EUR"]);
    }
}
