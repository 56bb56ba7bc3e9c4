//! Emit tracing events tagged with a log-reference code.
//!
//! ```rust
//! use ferr_common::{log_ref_err, logref::LibLogRef};
//!
//! log_ref_err!(LibLogRef::Socket.code(), "bind failed on {}", "eth0");
//! // ERROR ec=100663299 [EC 100663299] bind failed on eth0
//! ```

/// Emit a `warn` event carrying `ec = <code>`.
#[macro_export]
macro_rules! log_ref_warn {
    ($code:expr, $($arg:tt)+) => {{
        let code: u32 = $code;
        $crate::tracing::warn!(ec = code, "[EC {}] {}", code, ::std::format_args!($($arg)+));
    }};
}

/// Emit an `error` event carrying `ec = <code>`.
#[macro_export]
macro_rules! log_ref_err {
    ($code:expr, $($arg:tt)+) => {{
        let code: u32 = $code;
        $crate::tracing::error!(ec = code, "[EC {}] {}", code, ::std::format_args!($($arg)+));
    }};
}
