use crate::error::Error;
use crate::marketdata::{ExchangeRates, validate_currency, validate_rate};

mod exchanger;
pub use exchanger::*;

/// Factor `rate` such that `amount_in_to = amount_in_from * rate`.
///
/// Both codes are validated (`from` first) before they are compared, then the rate is
/// taken from the table, inverted, or crossed through `base_currency`. The first missing
/// or non-positive rate aborts the resolution.
pub fn resolve_rate(
    rates: &ExchangeRates,
    base_currency: &str,
    from: &str,
    to: &str,
) -> Result<f64, Error> {
    let from = validate_currency(from)?;
    let to = validate_currency(to)?;

    if from == to {
        return Ok(1.0);
    }

    if from == base_currency {
        validate_rate(rates.get(to))
    } else if to == base_currency {
        let rate_from = validate_rate(rates.get(from))?;
        Ok(1.0 / rate_from)
    } else {
        let rate_from = validate_rate(rates.get(from))?;
        let rate_to = validate_rate(rates.get(to))?;
        let rate_base = 1.0 / rate_from;
        Ok(rate_base * rate_to)
    }
}

/// Converts `amount` from `from` into `to`.
///
/// Identical codes return the amount untouched without any validation, and a zero amount
/// stays zero without looking at the table.
pub fn convert(
    rates: &ExchangeRates,
    base_currency: &str,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<f64, Error> {
    if from == to {
        return Ok(amount);
    }
    if amount == 0.0 {
        return Ok(0.0);
    }
    let rate = resolve_rate(rates, base_currency, from, to)?;
    Ok(rate * amount)
}
