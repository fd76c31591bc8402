//! Types shared between the portfolio navigation client and its tests.
//!
//! Nothing in this crate touches the browser, so everything here is
//! testable natively.

pub mod shared;
