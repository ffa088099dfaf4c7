//! ecalc library — application logic for the e calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
