//! Compound APY calculation
//!
//! APY = (1 + r)^n - 1, where r = premium / coverage and n = 365 / days.
//! The exponent is real-valued, so fractional periods compound correctly;
//! the result assumes the same periodic rate can be reinvested for a full
//! 365-day year, which is the standard convention for this figure rather
//! than a bug to correct.

use serde::{Deserialize, Serialize};

use crate::core::{ApyError, ApyResult};

/// Day-count convention for annualization (no leap-year adjustment)
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Compounded annual percentage yield.
///
/// `premium` is the total contract premium (per-share premium x 100), not
/// per-share. A zero premium yields exactly 0.0. Non-positive
/// `days_to_expiry` or `coverage_amount` fail with
/// [`ApyError::InvalidInput`]; a premium so negative that `1 + r <= 0`
/// fails with [`ApyError::Domain`], since a fractional power of a
/// non-positive base is undefined over the reals.
pub fn apy(premium: f64, coverage_amount: f64, days_to_expiry: i64) -> ApyResult<f64> {
    if days_to_expiry <= 0 {
        return Err(ApyError::invalid_input("days to expiry must be positive"));
    }
    if coverage_amount <= 0.0 {
        return Err(ApyError::invalid_input("coverage amount must be positive"));
    }

    let periodic_rate = premium / coverage_amount;
    let periods_per_year = DAYS_PER_YEAR / days_to_expiry as f64;

    let base = 1.0 + periodic_rate;
    if base <= 0.0 {
        return Err(ApyError::domain(format!(
            "cannot raise non-positive growth factor {} to a fractional power",
            base
        )));
    }

    let apy_decimal = base.powf(periods_per_year) - 1.0;
    Ok(apy_decimal * 100.0)
}

/// Compounding details behind a single APY figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldBreakdown {
    /// Return for one holding period (premium / coverage), as a fraction
    pub periodic_rate: f64,
    /// How many such periods fit in a 365-day year
    pub periods_per_year: f64,
    /// Total contract premium (per-share premium x 100 shares)
    pub total_premium: f64,
    /// Annualized yield, percent
    pub apy_pct: f64,
}

impl YieldBreakdown {
    /// Compute the APY along with the intermediate figures the report shows.
    pub fn compute(
        total_premium: f64,
        coverage_amount: f64,
        days_to_expiry: i64,
    ) -> ApyResult<Self> {
        let apy_pct = apy(total_premium, coverage_amount, days_to_expiry)?;

        Ok(Self {
            periodic_rate: total_premium / coverage_amount,
            periods_per_year: DAYS_PER_YEAR / days_to_expiry as f64,
            total_premium,
            apy_pct,
        })
    }
}
