//! crates/logging/src/tracing_macros.rs
//! Convenience macros that emit events on the `md5::*` targets.

/// Emit an input name trace.
///
/// # Example
/// ```ignore
/// trace_name!("{}", path.display());
/// ```
#[macro_export]
macro_rules! trace_name {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "md5::name", $($arg)*);
    };
}

/// Emit a statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("hashed {} bytes", bytes);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "md5::stats", $($arg)*);
    };
}

/// Emit a digest completion debug trace.
///
/// # Example
/// ```ignore
/// trace_digest!("digest complete after {} blocks", blocks);
/// ```
#[macro_export]
macro_rules! trace_digest {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "md5::digest", $($arg)*);
    };
}

/// Emit an I/O debug trace.
///
/// # Example
/// ```ignore
/// trace_io!("opened {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_io {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "md5::io", $($arg)*);
    };
}
