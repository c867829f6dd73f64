use std::{collections::HashMap, fmt::Write, sync::Arc};

use anyhow::Result;
use itertools::Itertools as _;
use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Registry};

type LogMessage = (&'static str, String);

/// Installs `console_layer` together with a [`LogSink`] as the global
/// subscriber, returning the sink so its contents can be drained.
///
/// # Errors
/// If a global subscriber is already installed.
pub fn init(
    console_layer: impl tracing_subscriber::Layer<Registry> + Send + Sync + 'static,
) -> Result<LogSink> {
    let sink = LogSink::default();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(sink.clone())
        .try_init()?;

    Ok(sink)
}

/// Human readable events on stderr.
pub fn console_layer() -> impl tracing_subscriber::Layer<Registry> + Send + Sync + 'static {
    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
}

/// Log messages waiting to be collected, bucketed by level.
#[derive(Default)]
pub struct LogBuffer {
    pending_logs: Mutex<HashMap<Level, Vec<LogMessage>>>,
}

impl LogBuffer {
    fn push(&self, level: Level, message: LogMessage) {
        self.pending_logs.lock().entry(level).or_default().push(message);
    }

    /// Removes everything pending.
    pub fn drain(&self) -> HashMap<Level, Vec<LogMessage>> {
        self.pending_logs.lock().drain().collect()
    }

    /// Removes everything pending, most severe first, one line per message.
    pub fn drain_lines(&self) -> Vec<String> {
        self.drain()
            .into_iter()
            .sorted_by_key(|(level, _)| *level)
            .flat_map(|(level, messages)| {
                messages
                    .into_iter()
                    .map(move |(target, message)| format!("[{level}] `{target}`: {message}"))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending_logs.lock().values().all(Vec::is_empty)
    }
}

/// Shared handle to a [`LogBuffer`] that can be layered into a subscriber.
#[derive(Clone, Default)]
pub struct LogSink(pub Arc<LogBuffer>);

impl LogSink {
    /// Runs `f` with only this sink subscribed on the current thread.
    pub fn scoped<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl std::ops::Deref for LogSink {
    type Target = LogBuffer;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

struct StringVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut String,
}

impl tracing::field::Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let result = if field.name() == "message" {
            write!(self.message, "{value:?}")
        } else {
            write!(self.fields, " {}={value:?}", field.name())
        };

        result.expect("writing to a String cannot fail");
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            write!(self.fields, " {}={value}", field.name())
                .expect("writing to a String cannot fail");
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogSink {
    fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
        let metadata = event.metadata();
        let enabled = if metadata.target().starts_with("unwrap_") {
            Level::INFO >= *metadata.level()
        } else {
            Level::WARN >= *metadata.level()
        };

        if !enabled {
            return;
        }

        let mut message = String::new();
        let mut fields = String::new();
        event.record(&mut StringVisitor {
            message: &mut message,
            fields: &mut fields,
        });

        message.push_str(&fields);
        self.push(*metadata.level(), (metadata.target(), message));
    }
}

#[cfg(test)]
mod tests {
    use tracing::{debug, info, warn};

    use super::*;

    #[test]
    fn keeps_own_targets_from_info_and_others_from_warn() {
        let sink = LogSink::default();
        sink.scoped(|| {
            info!(target: "unwrap_core", "kept");
            debug!(target: "unwrap_core", "dropped");
            info!(target: "hyper", "dropped");
            warn!(target: "hyper", "also kept");
        });

        let logs = sink.drain();
        assert_eq!(logs.values().map(Vec::len).sum::<usize>(), 2);
        assert_eq!(logs[&Level::INFO], vec![("unwrap_core", String::from("kept"))]);
        assert_eq!(logs[&Level::WARN], vec![("hyper", String::from("also kept"))]);
        assert!(sink.is_empty());
    }

    #[test]
    fn lines_are_most_severe_first_with_fields() {
        let sink = LogSink::default();
        sink.scoped(|| {
            info!(target: "unwrap_core", "second");
            tracing::error!(target: "unwrap_core", line = 4, "first");
        });

        assert_eq!(
            sink.drain_lines(),
            vec![
                String::from("[ERROR] `unwrap_core`: first line=4"),
                String::from("[INFO] `unwrap_core`: second"),
            ]
        );
    }
}
