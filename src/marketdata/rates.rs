use crate::error::{Error, ErrorKind};

use serde::Deserialize;
use std::collections::HashMap;

/// Rates relative to a base currency: `rate[C]` is the value of one unit of `C`
/// expressed in the base currency. The base currency itself has no entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn get(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.rates.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(|key| key.as_str())
    }
}

impl From<HashMap<String, f64>> for ExchangeRates {
    fn from(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ExchangeRates {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            rates: iter
                .into_iter()
                .map(|(currency, rate)| (currency.into(), rate))
                .collect(),
        }
    }
}

/// A rate is usable only when present and strictly positive.
pub fn validate_rate(rate: Option<f64>) -> Result<f64, Error> {
    match rate {
        None => Err(Error::new(ErrorKind::InvalidRate, "rate is missing")),
        Some(value) if value > 0.0 => Ok(value),
        Some(value) => Err(Error::new(
            ErrorKind::InvalidRate,
            format!("rate {value} is not strictly positive"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn exchange_rates_lookup() {
        let rates: ExchangeRates = [("BGN", 1.9558), ("USD", 1.08), ("XXX", 0.0)]
            .into_iter()
            .collect();

        assert_eq!(rates.len(), 3);
        assert!(!rates.is_empty());
        assert_float_absolute_eq!(rates.get("BGN").unwrap(), 1.9558, 1e-12);
        assert_eq!(rates.get("XXX"), Some(0.0));
        assert!(rates.contains("USD"));

        // absent is not the same as present with an invalid value
        assert!(!rates.contains("JPY"));
        assert!(rates.get("JPY").is_none());

        let mut currencies = rates.currencies().collect::<Vec<_>>();
        currencies.sort();
        assert_eq!(currencies, vec!["BGN", "USD", "XXX"]);
    }

    #[test]
    fn exchange_rates_from_json() {
        let rates: ExchangeRates = serde_json::from_str(r#"{"BGN": 1.9558, "USD": 1.08}"#).unwrap();
        assert_eq!(rates.len(), 2);
        assert_float_absolute_eq!(rates.get("USD").unwrap(), 1.08, 1e-12);

        let empty = ExchangeRates::new();
        assert!(empty.is_empty());
        assert!(empty.get("BGN").is_none());
    }

    #[test]
    fn validate_rate_ok() {
        assert_float_absolute_eq!(validate_rate(Some(1.9558)).unwrap(), 1.9558, 1e-12);
        assert_float_absolute_eq!(validate_rate(Some(1e-9)).unwrap(), 1e-9, 1e-15);
    }

    #[test]
    fn validate_rate_invalid() {
        for rate in [None, Some(0.0), Some(-0.0), Some(-1.5), Some(f64::NAN)] {
            let err = validate_rate(rate).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidRate);
        }
    }
}
