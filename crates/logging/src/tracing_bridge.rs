//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flag system.
//!
//! [`Md5Layer`] maps each event's target onto an info or debug flag and keeps
//! it only when the configured level for that flag is high enough. Kept
//! events land in an [`EventCollector`] that the caller drains and renders.
//!
//! Targets are `md5::<flag>`: `md5::name` and `md5::stats` are info flags;
//! `md5::digest`, `md5::io` and `md5::pad` are debug flags. Warnings and
//! errors are recorded regardless of target or verbosity.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::collector::{DiagnosticEvent, EventCollector};
use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};

/// A tracing layer that records events permitted by a [`VerbosityConfig`].
#[derive(Debug)]
pub struct Md5Layer {
    config: VerbosityConfig,
    collector: EventCollector,
}

impl Md5Layer {
    /// Creates a layer recording into `collector`.
    #[must_use]
    pub const fn new(config: VerbosityConfig, collector: EventCollector) -> Self {
        Self { config, collector }
    }

    /// The verbosity configuration consulted for every event.
    #[must_use]
    pub const fn config(&self) -> &VerbosityConfig {
        &self.config
    }

    /// The flag part of an `md5::<flag>` target; other targets have none.
    fn flag_name(target: &str) -> Option<&str> {
        target.strip_prefix("md5::")
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        match Self::flag_name(target)? {
            "name" => Some(InfoFlag::Name),
            "stats" => Some(InfoFlag::Stats),
            _ => None,
        }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match Self::flag_name(target)? {
            "digest" => Some(DebugFlag::Digest),
            "io" => Some(DebugFlag::Io),
            "pad" => Some(DebugFlag::Pad),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for Md5Layer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let level = metadata.level();

        if *level <= Level::WARN {
            if let Some(message) = MessageVisitor::collect(event) {
                self.collector.push(DiagnosticEvent::Warning { message });
            }
            return;
        }

        let verbosity_level = Self::level_to_verbosity_level(level);

        // Debug flags first, they are the more specific category
        if let Some(flag) = Self::target_to_debug_flag(target) {
            if self.config.debug_gte(flag, verbosity_level) {
                if let Some(message) = MessageVisitor::collect(event) {
                    self.collector.push(DiagnosticEvent::Debug {
                        flag,
                        level: verbosity_level,
                        message,
                    });
                }
            }
            return;
        }

        if let Some(flag) = Self::target_to_info_flag(target) {
            if self.config.info_gte(flag, verbosity_level) {
                if let Some(message) = MessageVisitor::collect(event) {
                    self.collector.push(DiagnosticEvent::Info {
                        flag,
                        level: verbosity_level,
                        message,
                    });
                }
            }
        }
    }
}

/// Visitor that renders the message followed by any other fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl MessageVisitor {
    fn collect(event: &tracing::Event<'_>) -> Option<String> {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        visitor.finish()
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> Option<String> {
        match (self.message, self.fields.is_empty()) {
            (Some(message), true) => Some(message),
            (Some(message), false) => Some(format!("{message} {}", self.fields)),
            (None, false) => Some(self.fields),
            (None, true) => None,
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}
