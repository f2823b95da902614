//! The error type shared by the fallible quantity operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("quantities must have the same units ({left} vs {right})")]
    UnitsMismatched {
        left: String,
        right: String,
    },
    #[error("numeric operation failed: {0}")]
    NumericOpFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

