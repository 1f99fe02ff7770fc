//! Supported display currencies
//!
//! Amounts are never converted; the currency only decides which symbol is
//! printed in front of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. "GBP"
    pub code: &'static str,
    /// Symbol placed before amounts, e.g. "£"
    pub symbol: &'static str,
    pub name: &'static str,
}

/// All currencies the user can pick, in menu order
pub const CURRENCIES: [Currency; 3] = [
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
    },
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
    },
    Currency {
        code: "EUR",
        symbol: "€",
        name: "Euro",
    },
];

/// Code of the currency used when nothing else is configured
pub const DEFAULT_CURRENCY_CODE: &str = "GBP";

/// Look up a currency by code (case-insensitive)
pub fn find_currency(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Look up a currency by code, falling back to the default currency
pub fn lookup_currency(code: &str) -> &'static Currency {
    find_currency(code).unwrap_or(&CURRENCIES[0])
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.code, self.symbol, self.name)
    }
}

/// Currency code as persisted in settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a code for a supported currency
    pub fn parse(code: &str) -> Option<Self> {
        find_currency(code).map(|c| Self(c.code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to the currency descriptor; unknown codes resolve to the default
    pub fn currency(&self) -> &'static Currency {
        lookup_currency(&self.0)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY_CODE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_currency() {
        assert_eq!(lookup_currency("USD").symbol, "$");
        assert_eq!(lookup_currency("eur").symbol, "€");
        assert_eq!(lookup_currency(" gbp ").name, "British Pound");
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_default() {
        let c = lookup_currency("JPY");
        assert_eq!(c.code, DEFAULT_CURRENCY_CODE);
        assert!(find_currency("JPY").is_none());
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!(CurrencyCode::parse("usd").unwrap().as_str(), "USD");
        assert!(CurrencyCode::parse("XYZ").is_none());
        assert_eq!(CurrencyCode::default().currency().symbol, "£");
    }

    #[test]
    fn test_currency_code_tolerates_unknown_on_load() {
        let code: CurrencyCode = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(code.currency().code, "GBP");
    }
}
