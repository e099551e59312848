use std::fmt;
use tracing::Level;

/// Output channel a log call is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Error,
    Debug,
    Info,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Log, Channel::Error, Channel::Debug, Channel::Info];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    /// Severity used when the channel is written through tracing
    pub fn level(&self) -> Level {
        match self {
            Self::Log | Self::Info => Level::INFO,
            Self::Error => Level::ERROR,
            Self::Debug => Level::DEBUG,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
