//! Core data types for the APY calculator
//!
//! Defines fundamental types:
//! - OptionType: Call/Put
//! - ParsedOption: decoded option symbol (ticker, expiry, type, strike)
//! - ApyError/ApyResult: error taxonomy for the whole pipeline

pub mod error;
pub mod option;

pub use error::*;
pub use option::*;
