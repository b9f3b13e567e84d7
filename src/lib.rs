pub mod error;
pub mod exchange;
pub mod marketdata;
pub mod referential;

pub use error::{Error, ErrorKind};
pub use exchange::{Exchanger, convert, resolve_rate};
pub use marketdata::{ExchangeRates, validate_currency, validate_rate};
pub use referential::Referential;
