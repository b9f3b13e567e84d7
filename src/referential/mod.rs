use crate::error::{Error, ErrorKind};
use crate::marketdata::ExchangeRates;

use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Referential, error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Referential, format!("not json format : {error}"))
    }
}

/// Reads rate tables produced by an upstream provider.
///
/// Values are taken as they are: a zero or negative rate only fails once it is looked up.
pub struct Referential {
    rates_file: PathBuf,
}

impl Referential {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            rates_file: path.into(),
        }
    }

    pub fn load_rates(&self) -> Result<ExchangeRates, Error> {
        let filename = self.check_filename(&self.rates_file)?;
        debug!("reading rates from {}", filename.display());
        let file = File::open(filename)?;
        let rates = Self::from_reader(BufReader::new(file))?;
        info!("{} rates loaded", rates.len());
        Ok(rates)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ExchangeRates, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    fn check_filename<'p>(&self, filename: &'p Path) -> Result<&'p Path, Error> {
        if !filename.is_file() {
            return Err(Error::new(
                ErrorKind::Referential,
                format!("{} is not valid file", filename.display()),
            ));
        }
        Ok(filename)
    }
}
