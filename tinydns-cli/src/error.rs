use std::fmt;

use tinydns_proto::DnsError;

/// Errors surfaced by the CLI, one enum for this binary's own boundary
/// layer, wrapping the codec's `DnsError` and the I/O errors a UDP
/// round-trip can produce.
#[derive(Debug)]
pub enum CliError {
    Dns(DnsError),
    Io(std::io::Error),
    Config(config::ConfigError),
    /// Every configured nameserver was tried and none answered.
    NoNameserverResponded,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns(e) => write!(f, "dns codec error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::NoNameserverResponded => write!(f, "no configured nameserver responded"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DnsError> for CliError {
    fn from(value: DnsError) -> Self {
        Self::Dns(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(value: config::ConfigError) -> Self {
        Self::Config(value)
    }
}
