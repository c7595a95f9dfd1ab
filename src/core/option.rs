//! Option symbol decoding
//!
//! Parses compact OCC-style option symbols of the form
//! `TICKER` + `YYMMDD` + `P|C` + 8-digit strike.
//!
//! Example: `SHOP270115P00140000`
//! - SHOP: underlying ticker
//! - 270115: January 15, 2027
//! - P: Put
//! - 00140000: strike $140.00 (last 3 digits are decimals)

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{ApyError, ApyResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Symbol character: `C` for call, `P` for put
    pub fn as_char(&self) -> char {
        match self {
            OptionType::Call => 'C',
            OptionType::Put => 'P',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl TryFrom<char> for OptionType {
    type Error = ApyError;

    fn try_from(c: char) -> ApyResult<Self> {
        match c.to_ascii_uppercase() {
            'C' => Ok(OptionType::Call),
            'P' => Ok(OptionType::Put),
            _ => Err(ApyError::InvalidOptionType(c)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded option symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedOption {
    /// Underlying ticker (e.g., "SHOP", "AAPL")
    pub ticker: String,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Strike price in dollars
    pub strike: f64,
}

impl ParsedOption {
    /// Parse a compact option symbol.
    ///
    /// The input is uppercased first and must match the grammar exactly:
    /// one or more letters, six date digits, `P` or `C`, eight strike
    /// digits. Anything else, including an impossible calendar date such
    /// as February 30, fails with [`ApyError::Format`] carrying the
    /// offending symbol.
    pub fn parse(symbol: &str) -> ApyResult<Self> {
        let normalized = symbol.to_ascii_uppercase();
        let len = normalized.len();

        // Minimum: 1-letter ticker + 6 date digits + type char + 8 strike digits
        if !normalized.is_ascii() || len < 16 {
            return Err(ApyError::format(symbol));
        }

        // The date, type, and strike fields have fixed widths, so split
        // from the end; everything before them is the ticker.
        let (ticker, tail) = normalized.split_at(len - 15);
        let date_str = &tail[..6];
        let type_char = tail.as_bytes()[6] as char;
        let strike_str = &tail[7..];

        if !ticker.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ApyError::format(symbol));
        }
        if !date_str.bytes().all(|b| b.is_ascii_digit())
            || !strike_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ApyError::format(symbol));
        }

        let option_type =
            OptionType::try_from(type_char).map_err(|_| ApyError::format(symbol))?;

        // YYMMDD, with YY meaning 2000 + YY
        let year: i32 = date_str[..2]
            .parse()
            .map_err(|_| ApyError::format(symbol))?;
        let month: u32 = date_str[2..4]
            .parse()
            .map_err(|_| ApyError::format(symbol))?;
        let day: u32 = date_str[4..6]
            .parse()
            .map_err(|_| ApyError::format(symbol))?;
        let expiration = NaiveDate::from_ymd_opt(2000 + year, month, day)
            .ok_or_else(|| ApyError::format(symbol))?;

        // 8 digits with 3 implied decimal places
        let strike_scaled: u32 = strike_str
            .parse()
            .map_err(|_| ApyError::format(symbol))?;
        let strike = strike_scaled as f64 / 1000.0;

        Ok(Self {
            ticker: ticker.to_string(),
            expiration,
            option_type,
            strike,
        })
    }

    /// Re-encode the canonical compact symbol.
    ///
    /// Round-trips with [`ParsedOption::parse`].
    pub fn symbol(&self) -> String {
        format!(
            "{}{}{}{:08}",
            self.ticker,
            self.expiration.format("%y%m%d"),
            self.option_type.as_char(),
            (self.strike * 1000.0).round() as u64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put() {
        let opt = ParsedOption::parse("SHOP270115P00140000").unwrap();
        assert_eq!(opt.ticker, "SHOP");
        assert_eq!(opt.expiration, NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());
        assert_eq!(opt.option_type, OptionType::Put);
        assert_eq!(opt.strike, 140.0);
    }

    #[test]
    fn test_parse_call() {
        let opt = ParsedOption::parse("AAPL240315C00150000").unwrap();
        assert_eq!(opt.ticker, "AAPL");
        assert_eq!(opt.expiration, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(opt.option_type, OptionType::Call);
        assert_eq!(opt.strike, 150.0);
    }

    #[test]
    fn test_parse_lowercase() {
        let opt = ParsedOption::parse("shop270115p00140000").unwrap();
        assert_eq!(opt.ticker, "SHOP");
        assert_eq!(opt.option_type, OptionType::Put);
    }

    #[test]
    fn test_parse_fractional_strike() {
        let opt = ParsedOption::parse("SPY240119C00052500").unwrap();
        assert_eq!(opt.strike, 52.5);
    }

    #[test]
    fn test_parse_single_char_ticker() {
        let opt = ParsedOption::parse("F240119P00002500").unwrap();
        assert_eq!(opt.ticker, "F");
        assert_eq!(opt.strike, 2.5);
    }

    #[test]
    fn test_parse_invalid_calendar_date() {
        // February 30 does not exist
        let result = ParsedOption::parse("XX300230P00010000");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_invalid_month() {
        let result = ParsedOption::parse("AAPL241319C00195000");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_too_short() {
        let result = ParsedOption::parse("AAPL240119C001");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_empty_ticker() {
        let result = ParsedOption::parse("240119C00195000");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_bad_option_type() {
        let result = ParsedOption::parse("AAPL240119X00195000");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let result = ParsedOption::parse("AAPL240119C00195000Z9");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        // The grammar is anchored at both ends; padding is a deviation
        let result = ParsedOption::parse("  SHOP270115P00140000  ");
        assert!(matches!(result, Err(ApyError::Format(_))));

        let result = ParsedOption::parse("SHOP270115P00140000\n");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_parse_non_digit_strike() {
        let result = ParsedOption::parse("AAPL240119C001950XX");
        assert!(matches!(result, Err(ApyError::Format(_))));
    }

    #[test]
    fn test_roundtrip() {
        let original = "NVDA250117P00850000";
        let parsed = ParsedOption::parse(original).unwrap();
        assert_eq!(parsed.symbol(), original);
    }

    #[test]
    fn test_roundtrip_small_strike() {
        let parsed = ParsedOption::parse("F240119P00002500").unwrap();
        assert_eq!(parsed.symbol(), "F240119P00002500");
    }

    #[test]
    fn test_option_type_from_char() {
        assert_eq!(OptionType::try_from('c').unwrap(), OptionType::Call);
        assert_eq!(OptionType::try_from('P').unwrap(), OptionType::Put);
        assert!(matches!(
            OptionType::try_from('X'),
            Err(ApyError::InvalidOptionType('X'))
        ));
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
    }
}
