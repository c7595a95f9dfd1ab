//! Days-to-expiry arithmetic
//!
//! The reference date is always passed in explicitly so the calculation is
//! deterministic under test; only the CLI binary reads the wall clock.

use chrono::NaiveDate;

use crate::core::{ApyError, ApyResult};

/// Whole days from `today` until `expiration`.
///
/// Both dates are treated as midnight; there is no time-of-day component.
/// Zero days (expiring today) is valid. An expiration strictly before
/// `today` fails with [`ApyError::Expired`].
pub fn days_to_expiry(expiration: NaiveDate, today: NaiveDate) -> ApyResult<i64> {
    let days = (expiration - today).num_days();

    if days < 0 {
        return Err(ApyError::Expired(expiration));
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_to_expiry() {
        let days = days_to_expiry(ymd(2026, 12, 16), ymd(2026, 11, 16)).unwrap();
        assert_eq!(days, 30);
    }

    #[test]
    fn test_expiring_today_is_valid() {
        let today = ymd(2026, 6, 19);
        assert_eq!(days_to_expiry(today, today).unwrap(), 0);
    }

    #[test]
    fn test_expired_yesterday() {
        let result = days_to_expiry(ymd(2026, 6, 18), ymd(2026, 6, 19));
        assert!(matches!(result, Err(ApyError::Expired(d)) if d == ymd(2026, 6, 18)));
    }

    #[test]
    fn test_crosses_year_boundary() {
        let days = days_to_expiry(ymd(2027, 1, 15), ymd(2026, 12, 16)).unwrap();
        assert_eq!(days, 30);
    }

    #[test]
    fn test_leap_day() {
        let days = days_to_expiry(ymd(2028, 3, 1), ymd(2028, 2, 28)).unwrap();
        assert_eq!(days, 2);
    }
}
