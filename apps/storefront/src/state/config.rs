//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown by the shell banner)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of minor-unit digits shown after the decimal point
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Mini Ecommerce Store"
    /// - Currency: INR (₹), prices shown as whole amounts (`₹1999`)
    fn default() -> Self {
        ConfigState {
            store_name: "Mini Ecommerce Store".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Largest supported number of decimals; keeps `10^decimals` within i64.
    pub const MAX_CURRENCY_DECIMALS: u8 = 6;

    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_CODE`: Override currency code
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_CURRENCY_DECIMALS`: Override decimals (0-6)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("STOREFRONT_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STOREFRONT_CURRENCY_DECIMALS") {
            match raw.trim().parse::<u8>() {
                Ok(decimals) if decimals <= Self::MAX_CURRENCY_DECIMALS => {
                    config.currency_decimals = decimals;
                }
                _ => warn!(value = %raw, "Ignoring invalid STOREFRONT_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_app::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1999), "₹1999");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let sign = if minor < 0 { "-" } else { "" };
        let decimals = self.currency_decimals.min(Self::MAX_CURRENCY_DECIMALS);

        if decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, minor.unsigned_abs());
        }

        let divisor = 10_u64.pow(u32::from(decimals));
        let abs = minor.unsigned_abs();

        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            abs / divisor,
            abs % divisor,
            width = usize::from(decimals)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_whole_units() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1999), "₹1999");
        assert_eq!(config.format_currency(0), "₹0");
        assert_eq!(config.format_currency(-25), "-₹25");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        let config = ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_CURRENCY_SYMBOL", "€"),
            ("STOREFRONT_CURRENCY_DECIMALS", "2"),
        ]));

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_decimals, 2);
        assert_eq!(config.currency_code, "INR");
    }

    #[test]
    fn test_from_lookup_ignores_invalid_decimals() {
        let config = ConfigState::from_lookup(lookup_from(&[(
            "STOREFRONT_CURRENCY_DECIMALS",
            "twelve",
        )]));
        assert_eq!(config.currency_decimals, 0);

        let config =
            ConfigState::from_lookup(lookup_from(&[("STOREFRONT_CURRENCY_DECIMALS", "9")]));
        assert_eq!(config.currency_decimals, 0);
    }
}
