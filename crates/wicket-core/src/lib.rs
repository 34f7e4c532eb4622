//! # wicket-core
//! Foundation types and traits for Wicket prize distribution.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
