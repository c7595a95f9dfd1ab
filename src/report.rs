//! Position analysis and text report
//!
//! Ties the pipeline together: symbol -> parsed option -> days to expiry ->
//! coverage -> optional yield breakdown, and renders the report the CLI
//! prints. Everything is computed against an injected reference date, so
//! identical inputs always produce byte-identical output.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calc::{coverage_amount, days_to_expiry, YieldBreakdown, CONTRACT_MULTIPLIER};
use crate::core::{ApyResult, ParsedOption};

/// Full analysis of a single covered option position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Decoded option contract
    pub option: ParsedOption,
    /// Current price of the underlying
    pub stock_price: f64,
    /// Whole days until expiration
    pub days_to_expiry: i64,
    /// Capital securing the position
    pub coverage_amount: f64,
    /// Yield figures, present when a premium was supplied
    pub breakdown: Option<YieldBreakdown>,
}

/// Run the full pipeline against an injected reference date.
///
/// `premium_per_share` is scaled x100 into the total contract premium
/// before the APY step; pass `None` to report position details only.
pub fn analyze(
    symbol: &str,
    stock_price: f64,
    premium_per_share: Option<f64>,
    today: NaiveDate,
) -> ApyResult<Analysis> {
    let option = ParsedOption::parse(symbol)?;
    let days = days_to_expiry(option.expiration, today)?;
    let coverage = coverage_amount(option.option_type, stock_price, option.strike)?;

    let breakdown = match premium_per_share {
        Some(premium) => Some(YieldBreakdown::compute(
            premium * CONTRACT_MULTIPLIER,
            coverage,
            days,
        )?),
        None => None,
    };

    Ok(Analysis {
        option,
        stock_price,
        days_to_expiry: days,
        coverage_amount: coverage,
        breakdown,
    })
}

impl Analysis {
    /// Render the human-readable report, one labelled line per field.
    pub fn report(&self) -> String {
        let symbol = self.option.symbol();
        let mut out = String::new();

        let _ = writeln!(out, "Option Analysis for {}", symbol);
        let _ = writeln!(out, "{}", "=".repeat(50));
        let _ = writeln!(out, "{:<24}{}", "Ticker:", self.option.ticker);
        let _ = writeln!(out, "{:<24}{}", "Option Type:", self.option.option_type);
        let _ = writeln!(out, "{:<24}${:.2}", "Strike Price:", self.option.strike);
        let _ = writeln!(out, "{:<24}${:.2}", "Current Price:", self.stock_price);
        let _ = writeln!(
            out,
            "{:<24}{}",
            "Expiration:",
            self.option.expiration.format("%B %d, %Y")
        );
        let _ = writeln!(out, "{:<24}{}", "Days to Expiry:", self.days_to_expiry);
        let _ = writeln!(
            out,
            "{:<24}{}",
            "Coverage Amount:",
            format_currency(self.coverage_amount)
        );

        match &self.breakdown {
            Some(b) => {
                let _ = writeln!(
                    out,
                    "{:<24}{:.4}%",
                    "Interest per period:",
                    b.periodic_rate * 100.0
                );
                let _ = writeln!(
                    out,
                    "{:<24}{:.2}",
                    "Compounding periods/yr:", b.periods_per_year
                );
                let _ = writeln!(
                    out,
                    "{:<24}{}",
                    "Total premium:",
                    format_currency(b.total_premium)
                );
                let _ = writeln!(out, "{:<24}{:.2}%", "APY:", b.apy_pct);
            }
            None => {
                let _ = writeln!(out);
                let _ = writeln!(out, "To calculate APY, provide --premium/-p");
                let _ = writeln!(
                    out,
                    "Example: option-apy -s {} -c {} -p 2.50",
                    symbol, self.stock_price
                );
            }
        }

        out
    }
}

/// Format a dollar amount with thousands separators, e.g. `$14,550.00`.
fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
