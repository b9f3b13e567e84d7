use super::{convert, resolve_rate};
use crate::error::Error;
use crate::marketdata::ExchangeRates;

/// Binds a rate table to its base currency for repeated conversions.
#[derive(Debug, Copy, Clone)]
pub struct Exchanger<'a> {
    rates: &'a ExchangeRates,
    base_currency: &'a str,
}

impl<'a> Exchanger<'a> {
    pub fn new(rates: &'a ExchangeRates, base_currency: &'a str) -> Self {
        Self {
            rates,
            base_currency,
        }
    }

    pub fn base_currency(&self) -> &str {
        self.base_currency
    }

    pub fn rates(&self) -> &ExchangeRates {
        self.rates
    }

    #[inline]
    pub fn rate(&self, from: &str, to: &str) -> Result<f64, Error> {
        resolve_rate(self.rates, self.base_currency, from, to)
    }

    #[inline]
    pub fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, Error> {
        convert(self.rates, self.base_currency, from, to, amount)
    }

    /// Sums amounts held in various currencies into the reporting currency `to`.
    /// Stops at the first amount that cannot be converted.
    pub fn total<I, S>(&self, to: &str, amounts: I) -> Result<f64, Error>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        amounts
            .into_iter()
            .map(|(currency, amount)| self.convert(currency.as_ref(), to, amount))
            .sum()
    }
}
