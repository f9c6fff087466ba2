//! Tracing subscriber wiring for a single CLI invocation.

use std::io::{self, Write};

use logging::{EventCollector, Md5Layer, VerbosityConfig};
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::arguments::PROGRAM_NAME;

/// Environment variable that enables raw `tracing` output on stderr.
///
/// The value is an `EnvFilter` directive such as `md5=trace`.
pub const LOG_ENV: &str = "OC_MD5_LOG";

/// Builds the subscriber used while a command runs.
///
/// Events permitted by `config` are stored in `events`; the caller renders
/// them. When [`LOG_ENV`] is set, a formatting layer also writes every event
/// matching its directives straight to the process stderr.
pub(crate) fn subscriber(
    config: VerbosityConfig,
    events: EventCollector,
) -> impl Subscriber + Send + Sync + 'static {
    let fmt_layer = std::env::var_os(LOG_ENV).map(|_| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_filter(EnvFilter::from_env(LOG_ENV))
    });

    tracing_subscriber::registry()
        .with(Md5Layer::new(config, events))
        .with(fmt_layer)
}

/// Writes and clears every recorded event, one per line.
pub(crate) fn flush_events<W: Write>(events: &EventCollector, stderr: &mut W) -> io::Result<()> {
    for event in events.drain() {
        writeln!(stderr, "{PROGRAM_NAME}: {event}")?;
    }
    Ok(())
}
