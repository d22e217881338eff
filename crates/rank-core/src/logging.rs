//! Logging built on the `tracing` ecosystem.
//!
//! Provides:
//! - Global subscriber setup: console output plus an optional log file in a
//!   working directory (via `tracing-appender`)
//! - Configurable log level via env var `RUST_LOG` or explicit parameter
//! - The [`Logger`] trait: leveled messages and a never-returning [`Logger::abort`]

use std::path::Path;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Timestamp layout for every log line, e.g. `24/03/17 09:41:05`.
const TIME_FORMAT: &str = "%y/%m/%d %H:%M:%S";

/// Initialize the global tracing subscriber.
///
/// Should be called once at program start. After this, all `tracing::info!()`
/// etc. macros will produce output.
///
/// # Parameters
///
/// - `log_level`: default level if `RUST_LOG` env var is not set (e.g. `"info"`)
/// - `log_dir`: optional directory; when set, lines are also appended to
///   `<log_dir>/<file_name>.log`
/// - `file_name`: log file stem (e.g. `"process"`)
pub fn init_logging(log_level: &str, log_dir: Option<&Path>, file_name: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stdout);

    if let Some(dir) = log_dir {
        let file_appender = tracing_appender::rolling::never(dir, format!("{file_name}.log"));
        let file_layer = fmt::layer()
            .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()))
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}

/// A sink for leveled messages.
///
/// Components that need logging hold a `Logger` instead of inheriting one.
pub trait Logger {
    /// Emit `message` at `level`.
    fn log(&self, level: Level, message: &str);

    /// Log `message` at error level, then terminate the current thread of
    /// control with a panic. Never returns.
    fn abort(&self, message: &str) -> ! {
        self.log(Level::ERROR, message);
        panic!("aborted: {message}");
    }

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

/// [`Logger`] that forwards to `tracing` events.
///
/// `component` is attached to every event as a structured field.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl TracingLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        let component = self.component.as_str();
        // tracing needs the level at compile time.
        if level == Level::TRACE {
            tracing::trace!(component, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(component, "{message}");
        } else if level == Level::INFO {
            tracing::info!(component, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(component, "{message}");
        } else {
            tracing::error!(component, "{message}");
        }
    }
}
