//! Prefixed logging
//!
//! Every line starts with [`PREFIX`] followed by the caller's arguments,
//! space-separated and in order. Lines go to a [`Sink`], which defaults to
//! tracing.

mod channel;
mod sink;

use lazy_static::lazy_static;
use serde::Serialize;
use std::fmt::{self, Display};

pub use channel::Channel;
pub use sink::{MemorySink, Sink, TracingSink, TARGET};

/// Tag put in front of every log line
pub const PREFIX: &str = "k8sClient:";

/// Filter used when `RUST_LOG` is unset: debug for this crate and its prefixed lines
pub const DEFAULT_FILTER: &str = "info,k8s_client_kit=debug,k8s_client=debug";

lazy_static! {
    static ref GLOBAL: Logger = Logger::new(TracingSink);
}

/// Process-wide logger used by the `k8s_*!` macros
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Render a line: the prefix, then each argument separated by a space
pub fn render(args: &[&dyn Display]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(PREFIX.to_string());
    parts.extend(args.iter().map(|arg| arg.to_string()));
    parts.join(" ")
}

/// Logger bound to one sink
#[derive(Debug, Default)]
pub struct Logger<S = TracingSink> {
    sink: S,
}

impl<S: Sink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn emit(&self, channel: Channel, args: &[&dyn Display]) {
        self.sink.emit(channel, &render(args));
    }

    pub fn log(&self, args: &[&dyn Display]) {
        self.emit(Channel::Log, args);
    }

    pub fn error(&self, args: &[&dyn Display]) {
        self.emit(Channel::Error, args);
    }

    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(Channel::Debug, args);
    }

    pub fn info(&self, args: &[&dyn Display]) {
        self.emit(Channel::Info, args);
    }
}

/// Displays a serializable value as pretty-printed JSON
pub struct Json<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Display for Json<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self.0) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "<unserializable: {}>", e),
        }
    }
}

#[macro_export]
macro_rules! k8s_log {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::global().log(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! k8s_error {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::global().error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! k8s_debug {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::global().debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! k8s_info {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::global().info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
