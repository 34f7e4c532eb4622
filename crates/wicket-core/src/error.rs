//! Error types for Wicket prize distribution.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoutError {
    #[error("invalid prize pool amount: {0:?}")] InvalidPoolAmount(String),
    #[error("negative prize pool amount: {0}")] NegativePoolAmount(f64),
}
