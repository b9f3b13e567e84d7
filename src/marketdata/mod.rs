mod currency;
mod rates;

pub use currency::*;
pub use rates::*;
