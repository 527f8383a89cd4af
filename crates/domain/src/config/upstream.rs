use crate::ForwardNames;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_FORWARD_NAMES: &str = "connectivitycheck.gstatic.com, pool.ntp.org";

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Resolver that forwarded queries are sent to. IP literal or hostname.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// How long one upstream exchange may take before it counts as failed.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_forward")]
    pub forward: ForwardNames,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            forward: default_forward(),
        }
    }
}

fn default_host() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_forward() -> ForwardNames {
    ForwardNames::parse(DEFAULT_FORWARD_NAMES)
}
