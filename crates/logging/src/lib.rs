#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns `tracing` events emitted by the hashing crates into
//! user-facing diagnostics whose volume is controlled by verbosity flags.
//!
//! # Design
//!
//! - [`InfoFlag`] and [`DebugFlag`] name the diagnostic categories.
//!   [`VerbosityConfig`] holds a level per flag, derived from the count of
//!   `-v` flags or set individually with tokens such as `io3`.
//! - [`Md5Layer`] is a `tracing-subscriber` layer that maps each event's
//!   target to a flag and records it in an [`EventCollector`] when the
//!   configured level allows.
//! - The collector is shared across threads so events raised on worker
//!   threads are kept alongside those from the caller.
//!
//! # Examples
//!
//! ```
//! use logging::{EventCollector, Md5Layer, VerbosityConfig};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let collector = EventCollector::new();
//! let layer = Md5Layer::new(VerbosityConfig::from_verbose_level(1), collector.clone());
//! let subscriber = tracing_subscriber::registry().with(layer);
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(target: "md5::name", "input.bin");
//!     tracing::debug!(target: "md5::io", "suppressed at -v");
//! });
//!
//! let events = collector.drain();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].to_string(), "input.bin");
//! ```

mod collector;
mod config;
mod levels;
mod tracing_bridge;
mod tracing_macros;

pub use collector::{DiagnosticEvent, EventCollector};
pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use tracing_bridge::Md5Layer;
