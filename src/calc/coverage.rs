//! Coverage capital per contract
//!
//! The cash (or stock value) that secures a short option position:
//! - Covered call: own 100 shares at the current price
//! - Cash-secured put: reserve cash to buy 100 shares at the strike

use crate::core::{ApyError, ApyResult, OptionType};

/// Shares per standard equity option contract
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Capital required to secure one contract.
///
/// Prices must be finite and non-negative; anything else fails with
/// [`ApyError::InvalidInput`].
pub fn coverage_amount(
    option_type: OptionType,
    stock_price: f64,
    strike: f64,
) -> ApyResult<f64> {
    if !stock_price.is_finite() || stock_price < 0.0 {
        return Err(ApyError::invalid_input(format!(
            "stock price must be a non-negative number, got {}",
            stock_price
        )));
    }
    if !strike.is_finite() || strike < 0.0 {
        return Err(ApyError::invalid_input(format!(
            "strike price must be a non-negative number, got {}",
            strike
        )));
    }

    Ok(match option_type {
        OptionType::Call => CONTRACT_MULTIPLIER * stock_price,
        OptionType::Put => CONTRACT_MULTIPLIER * strike,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_coverage_uses_stock_price() {
        let amount = coverage_amount(OptionType::Call, 148.75, 150.0).unwrap();
        assert_eq!(amount, 14875.0);
    }

    #[test]
    fn test_put_coverage_uses_strike() {
        let amount = coverage_amount(OptionType::Put, 148.75, 150.0).unwrap();
        assert_eq!(amount, 15000.0);
    }

    #[test]
    fn test_zero_prices_allowed() {
        assert_eq!(coverage_amount(OptionType::Call, 0.0, 150.0).unwrap(), 0.0);
        assert_eq!(coverage_amount(OptionType::Put, 148.75, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_stock_price_rejected() {
        let result = coverage_amount(OptionType::Call, -1.0, 150.0);
        assert!(matches!(result, Err(ApyError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_strike_rejected() {
        let result = coverage_amount(OptionType::Put, 148.75, -150.0);
        assert!(matches!(result, Err(ApyError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_rejected() {
        let result = coverage_amount(OptionType::Call, f64::NAN, 150.0);
        assert!(matches!(result, Err(ApyError::InvalidInput(_))));
    }
}
