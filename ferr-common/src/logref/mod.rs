//! Log references: coded, human-readable descriptions of warnings and errors.
//!
//! A log reference ([`LogRef`]) ties a numeric code to a short title, a prose
//! description and a suggested remediation. Subsystems publish fixed tables of
//! them and hand those tables to the process-wide [`LogRefRegistry`] once at
//! startup; after that any code can be looked up and rendered.
//!
//! # Code Ranges
//!
//! Every daemon owns a 24-bit block of codes, see [`FerrRange`]. The shared
//! library uses `0x06000001..=0x06FFFFFF`.
//!
//! # Tables
//!
//! Tables are `&'static [LogRef]` terminated by [`LogRef::END`]. The registry
//! stops at the first end marker, so anything placed after it is never
//! registered.
//!
//! # Example
//!
//! ```rust
//! use ferr_common::logref::{lib_error_init, log_ref_get, LibLogRef};
//!
//! lib_error_init();
//! let entry = log_ref_get(LibLogRef::Socket.code()).expect("registered");
//! println!("{}: {}", entry.code, entry.title);
//! ```

pub mod display;
pub mod error;
pub mod lib_errors;
pub mod macros;
pub mod range;
pub mod registry;
pub mod schema;
pub mod validate;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use display::{DisplayFormat, LogRefView, Selector, render};
pub use error::{CatalogError, LogRefError};
pub use lib_errors::{LIB_ERRORS, LIB_WARNINGS, LibLogRef, lib_error_init};
pub use range::{FerrRange, LIB_FERR_END, LIB_FERR_START};
pub use registry::{
    LogRefRegistry, RegistrationSummary, log_ref_add, log_ref_fini, log_ref_get,
};
pub use validate::{validate_catalog, validate_table};

/// Code carried by the end-of-table marker.
pub const END_FERR: u32 = 0xFFFF_FFFF;

/// A single log reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LogRef {
    /// Unique numeric code.
    pub code: u32,
    /// Short title.
    pub title: &'static str,
    /// What happened.
    pub description: &'static str,
    /// What the operator should do about it.
    pub suggestion: &'static str,
}

impl LogRef {
    /// End-of-table marker.
    pub const END: LogRef = LogRef {
        code: END_FERR,
        title: "",
        description: "",
        suggestion: "",
    };

    pub const fn new(
        code: u32,
        title: &'static str,
        description: &'static str,
        suggestion: &'static str,
    ) -> Self {
        Self {
            code,
            title,
            description,
            suggestion,
        }
    }

    /// Returns true for the end-of-table marker.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.code == END_FERR
    }

    /// Range the code belongs to, if any.
    #[must_use]
    pub fn range(&self) -> Option<FerrRange> {
        FerrRange::of(self.code)
    }
}

impl fmt::Display for LogRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[EC {}] {}", self.code, self.title)
    }
}

/// Severity of the table a log reference is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogRefKind {
    Warning,
    Error,
}

impl LogRefKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogRefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
