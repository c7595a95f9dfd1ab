//! Option APY CLI
//!
//! Command-line interface for the covered option yield calculator.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;

use option_apy::prelude::*;

/// Calculate the annualized yield of a covered option position
#[derive(Parser, Debug)]
#[command(
    name = "option-apy",
    version,
    about = "Calculate APY for cash-secured puts and covered calls",
    after_help = "Premium is per share; total contract premium = premium x 100 shares.\n\n\
                  Examples:\n  \
                  option-apy -s SHOP270115P00140000 -c 145.50 -p 2.50\n  \
                  option-apy AAPL240315C00150000 148.75 --premium 3.25"
)]
struct Args {
    /// Option symbol (e.g., SHOP270115P00140000)
    symbol: Option<String>,

    /// Current stock price
    stock_price: Option<f64>,

    /// Option symbol (overrides the positional argument)
    #[arg(short = 's', long = "symbol", value_name = "SYMBOL")]
    symbol_flag: Option<String>,

    /// Current stock price (overrides the positional argument)
    #[arg(short = 'c', long = "current-price", value_name = "PRICE")]
    price_flag: Option<f64>,

    /// Option premium per share
    #[arg(short = 'p', long = "premium", value_name = "PREMIUM")]
    premium: Option<f64>,
}

/// Named flags take precedence over positional arguments.
fn resolve_inputs(args: Args) -> ApyResult<(String, f64)> {
    let symbol = args.symbol_flag.or(args.symbol).ok_or_else(|| {
        ApyError::usage("option symbol is required (positional or --symbol/-s)")
    })?;
    let stock_price = args.price_flag.or(args.stock_price).ok_or_else(|| {
        ApyError::usage("stock price is required (positional or --current-price/-c)")
    })?;

    Ok((symbol, stock_price))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let premium = args.premium;
    let (symbol, stock_price) = resolve_inputs(args)?;

    let today = Utc::now().date_naive();
    let analysis = analyze(&symbol, stock_price, premium, today)?;
    print!("{}", analysis.report());

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Expected failures carry the ApyError taxonomy; anything else
            // escaped categorization.
            match err.downcast_ref::<ApyError>() {
                Some(e) => println!("Error: {}", e),
                None => println!("Unexpected error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}
