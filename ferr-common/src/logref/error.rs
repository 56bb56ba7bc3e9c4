//! Errors raised while looking up, rendering or validating log references.

use thiserror::Error;

/// Lookup and rendering failures.
#[derive(Debug, Error)]
pub enum LogRefError {
    /// No log reference is registered under the code.
    #[error("Code {0} - Unknown")]
    UnknownCode(u32),

    /// The text does not name a log-reference code.
    #[error("Invalid log reference code '{value}': {reason}")]
    InvalidCode { value: String, reason: &'static str },

    /// JSON rendering failed.
    #[error("Failed to serialize log references: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Problems found in a log-reference table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("table has no end marker")]
    MissingSentinel,

    #[error("end marker at index {index} is followed by {trailing} entries")]
    TrailingEntries { index: usize, trailing: usize },

    #[error("code {code} appears at index {first} and again at index {second}")]
    DuplicateCode {
        code: u32,
        first: usize,
        second: usize,
    },

    #[error("code {code} appears in table {first_table} and again in table {second_table}")]
    CrossTableDuplicate {
        code: u32,
        first_table: usize,
        second_table: usize,
    },

    #[error("code {code} has an empty {field}")]
    EmptyField { code: u32, field: &'static str },
}
