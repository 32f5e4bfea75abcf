use std::net::Ipv4Addr;
use std::path::Path;

use config::{Config as Layered, Environment, File};
use serde::Deserialize;

/// Resolver defaults, overridable by an optional TOML file and by
/// environment variables prefixed `TINYDNS_`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<Ipv4Addr>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_retries")]
    pub retries: u8,
}

fn default_nameservers() -> Vec<Ipv4Addr> {
    vec![Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(8, 8, 8, 8)]
}

fn default_timeout_ms() -> u64 {
    1_000
}

fn default_retries() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            timeout_ms: default_timeout_ms(),
            retries: default_retries(),
        }
    }
}

impl Config {
    /// Loads defaults, then a TOML file at `path` if given, then
    /// `TINYDNS_*` environment variables, in increasing precedence.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = Layered::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("TINYDNS").separator("_"));
        builder.build()?.try_deserialize()
    }
}
