//! # Option APY - Covered Option Yield Calculator
//!
//! Computes the compounded annual percentage yield (APY) of a cash-secured
//! put or covered call from the option symbol, current stock price, and
//! premium received.
//!
//! ## Overview
//!
//! Four pure functions run in sequence per invocation:
//! - **Symbol parsing**: decode `TICKER` + `YYMMDD` + `P|C` + 8-digit strike
//! - **Expiry**: whole days from a reference date to expiration
//! - **Coverage**: capital securing the position (100 shares per contract)
//! - **APY**: `(1 + r)^n - 1` with real-valued compounding
//!
//! ## Usage
//!
//! ```rust
//! use option_apy::prelude::*;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 12, 16).unwrap();
//! let analysis = analyze("SHOP270115P00140000", 145.50, Some(2.50), today).unwrap();
//!
//! println!("{}", analysis.report());
//! ```
//!
//! ## What This Tool Does NOT Do
//!
//! - Fetch market data (price and premium are user-supplied)
//! - Persist anything between runs
//! - Analyze multi-leg positions or portfolios

pub mod calc;
pub mod core;
pub mod report;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::calc::{
        apy, coverage_amount, days_to_expiry, YieldBreakdown, CONTRACT_MULTIPLIER,
        DAYS_PER_YEAR,
    };
    pub use crate::core::{ApyError, ApyResult, OptionType, ParsedOption};
    pub use crate::report::{analyze, Analysis};
}

// Re-export main types at crate root
pub use crate::core::{ApyError, ApyResult};
