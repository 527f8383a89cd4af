#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("invalid IPv4 {0:?}")]
    InvalidIpv4(String),

    #[error("invalid IPv6 {0:?}")]
    InvalidIpv6(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
