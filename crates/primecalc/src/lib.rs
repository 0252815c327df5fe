//! PrimeCalc-rs library: application logic for the prime calculator.

pub mod app;
pub mod config;
pub mod errors;
