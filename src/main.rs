use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::LevelFilter;
use log::{debug, info};
use serde::Serialize;

use fx_pivot::{Error, Exchanger, Referential};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputType {
    Text,
    Json,
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Convert an amount, or derive a rate, between two currencies through a base currency
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Rates file (json object: currency -> value of one unit in base currency)
    #[clap(short, long, value_parser)]
    rates_file: String,

    /// base currency the rates are expressed in
    #[clap(short, long, value_parser)]
    base_currency: String,

    /// source currency
    #[clap(short, long, value_parser)]
    from: String,

    /// target currency
    #[clap(short, long, value_parser)]
    to: String,

    /// amount to convert, only the rate is computed when omitted
    #[clap(short, long, value_parser, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// output type
    #[clap(default_value_t = OutputType::Text, short, long, value_parser)]
    output_type: OutputType,
}

#[derive(Serialize, Debug)]
struct Outcome<'a> {
    base_currency: &'a str,
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
}

impl std::fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.rate, self.amount) {
            (_, Some(amount)) => write!(f, "{} {}", amount, self.to),
            (Some(rate), None) => write!(f, "1 {} = {} {}", self.from, rate, self.to),
            (None, None) => Ok(()),
        }
    }
}

fn main() -> Result<(), Error> {
    //
    // cli arg
    let args = Args::parse();

    //
    // logger
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    //
    // load rates
    let rates = Referential::new(&args.rates_file).load_rates()?;
    let exchanger = Exchanger::new(&rates, &args.base_currency);
    debug!("rates relative to {}", exchanger.base_currency());

    //
    // compute
    let mut outcome = Outcome {
        base_currency: &args.base_currency,
        from: &args.from,
        to: &args.to,
        rate: None,
        amount: None,
    };
    match args.amount {
        Some(amount) => {
            outcome.amount = Some(exchanger.convert(&args.from, &args.to, amount)?);
        }
        None => {
            outcome.rate = Some(exchanger.rate(&args.from, &args.to)?);
        }
    }
    info!("{} -> {} done", args.from, args.to);

    //
    // write output
    match args.output_type {
        OutputType::Text => println!("{outcome}"),
        OutputType::Json => println!("{}", serde_json::to_string(&outcome)?),
    }

    Ok(())
}
