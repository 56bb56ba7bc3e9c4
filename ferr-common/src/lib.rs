//! Shared library for ferr.
//!
//! - [`logref`]: log-reference descriptors, the process-wide registry, the
//!   library catalog and its rendering
//! - [`config`]: layered configuration (defaults, TOML file, `FERR_` env)
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod logging;
pub mod logref;

#[doc(hidden)]
pub use tracing;

pub use config::{ConfigError, FerrConfig};
pub use logging::{LogConfig, LogFormat, LoggingGuards, init_logging};
pub use logref::{
    LibLogRef, LogRef, LogRefError, LogRefKind, LogRefRegistry, lib_error_init, log_ref_add,
    log_ref_fini, log_ref_get,
};
