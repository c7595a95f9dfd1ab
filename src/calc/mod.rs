//! Yield calculation pipeline
//!
//! Pure functions, executed in sequence per invocation:
//! - expiry: days remaining until the expiration date
//! - coverage: capital securing the position
//! - apy: compounded annualized yield

pub mod apy;
pub mod coverage;
pub mod expiry;

pub use apy::*;
pub use coverage::*;
pub use expiry::*;
