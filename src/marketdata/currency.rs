use crate::error::{Error, ErrorKind};

/// Accepts a currency code as long as it holds at least one non-whitespace character.
pub fn validate_currency(code: &str) -> Result<&str, Error> {
    if code.trim().is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidCurrency,
            format!("currency code {code:?} is blank"),
        ));
    }
    Ok(code)
}
