//! Income tax computation for the Indian old vs. new regime choice.
//!
//! The crate is a pure library: callers build a [`TaxInput`] snapshot, hand
//! it to [`compare`], and get back a [`ComparisonResult`] with both regime
//! worksheets, the cheaper regime, line-item breakdowns, and a list of
//! plain-text recommendations. There is no I/O and no state between calls.

pub mod calculations;
pub mod currency;
pub mod models;

pub use calculations::worksheets::{RegimeWorksheet, compare};
pub use models::*;
