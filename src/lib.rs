//! One-shot cleaning of a customer churn CSV.
//!
//! The [`pipeline`] loads the raw table, mean-imputes a fixed set of numeric
//! columns, fills every other gap with `"Unknown"`, normalizes a few column
//! types and drops `MonthlyCharge` outliers beyond the 1.5×IQR fences.

pub mod clean;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod rng;
