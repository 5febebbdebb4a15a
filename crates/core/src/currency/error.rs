//! Currency error types.
//!
//! Conversion and rate lookups are strict: an unknown code is an error.
//! Formatting and display-name lookups never produce these errors and
//! degrade to a plain rendering instead.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors that can occur during currency operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    // ========== Lookup Errors ==========
    /// Neither an override nor a registry entry exists for the code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    // ========== Write Errors ==========
    /// Rate is not a positive finite number.
    #[error("Invalid exchange rate for {code}: {rate}")]
    InvalidRate {
        /// Currency code the rate was submitted for.
        code: String,
        /// The rejected rate, as text (may be NaN or infinite).
        rate: String,
    },

    /// The base currency's rate is fixed at 1.
    #[error("Cannot override base currency {code} with rate {rate}")]
    BaseRateOverride {
        /// Base currency code.
        code: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Text is not a well-formed currency code.
    #[error("Invalid currency code: '{0}'")]
    InvalidCode(String),

    // ========== Registry Errors ==========
    /// Registry table violates its invariants.
    #[error("Invalid currency registry: {0}")]
    InvalidRegistry(String),

    // ========== Arithmetic Errors ==========
    /// Result does not fit in a decimal.
    #[error("Arithmetic overflow converting {amount} {code}")]
    Overflow {
        /// Amount being converted.
        amount: Decimal,
        /// Currency whose rate was applied.
        code: String,
    },
}

impl CurrencyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::BaseRateOverride { .. } => "BASE_RATE_OVERRIDE",
            Self::InvalidCode(_) => "INVALID_CURRENCY_CODE",
            Self::InvalidRegistry(_) => "INVALID_REGISTRY",
            Self::Overflow { .. } => "ARITHMETIC_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - caller supplied bad input
            Self::InvalidRate { .. }
            | Self::BaseRateOverride { .. }
            | Self::InvalidCode(_)
            | Self::Overflow { .. } => 400,

            Self::UnknownCurrency(_) => 404,

            // 500 Internal Server Error - startup table is broken
            Self::InvalidRegistry(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CurrencyError::UnknownCurrency("ZZZ".into()).error_code(),
            "UNKNOWN_CURRENCY"
        );
        assert_eq!(
            CurrencyError::InvalidRate {
                code: "USD".into(),
                rate: "0".into(),
            }
            .error_code(),
            "INVALID_RATE"
        );
        assert_eq!(
            CurrencyError::InvalidRegistry(String::new()).error_code(),
            "INVALID_REGISTRY"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            CurrencyError::UnknownCurrency("ZZZ".into()).http_status_code(),
            404
        );
        assert_eq!(
            CurrencyError::BaseRateOverride {
                code: "AED".into(),
                rate: dec!(2),
            }
            .http_status_code(),
            400
        );
        assert_eq!(
            CurrencyError::InvalidRegistry(String::new()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CurrencyError::UnknownCurrency("ZZZ".into()).to_string(),
            "Unknown currency: ZZZ"
        );
        assert_eq!(
            CurrencyError::InvalidRate {
                code: "USD".into(),
                rate: "-3.67".into(),
            }
            .to_string(),
            "Invalid exchange rate for USD: -3.67"
        );
        assert_eq!(
            CurrencyError::BaseRateOverride {
                code: "AED".into(),
                rate: dec!(1.5),
            }
            .to_string(),
            "Cannot override base currency AED with rate 1.5"
        );
    }
}
