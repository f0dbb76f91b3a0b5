//! Cleaning stages applied to a loaded table, in pipeline order:
//!
//! ```text
//!   impute   mean-fill listed numeric columns, then "Unknown" everywhere else
//!   types    Zip → text, Children / Age → int64
//! ```
//!
//! Outlier removal lives next to the other row predicates in
//! [`crate::data::filter`].

pub mod impute;
pub mod stats;
pub mod types;
