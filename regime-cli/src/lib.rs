//! Scenario loading for the regime comparison CLI.

pub mod scenario;
