use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info};

use super::channel::Channel;

/// Tracing target every prefixed line is emitted under
pub const TARGET: &str = "k8s_client";

/// Destination for rendered log lines
pub trait Sink: Send + Sync {
    fn emit(&self, channel: Channel, line: &str);
}

/// Writes each line as a tracing event at the channel's level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, channel: Channel, line: &str) {
        let name = channel.name();
        match channel {
            Channel::Error => error!(target: TARGET, channel = name, "{}", line),
            Channel::Debug => debug!(target: TARGET, channel = name, "{}", line),
            Channel::Log | Channel::Info => info!(target: TARGET, channel = name, "{}", line),
        }
    }
}

/// Keeps every line in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Channel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Channel, String)> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A poisoned lock still holds valid entries; logging must not fail.
    fn lock(&self) -> MutexGuard<'_, Vec<(Channel, String)>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sink for MemorySink {
    fn emit(&self, channel: Channel, line: &str) {
        self.lock().push((channel, line.to_string()));
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn emit(&self, channel: Channel, line: &str) {
        (**self).emit(channel, line)
    }
}
