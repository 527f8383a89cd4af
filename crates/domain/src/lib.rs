//! stubdns domain layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod forward_names;
pub mod record_type;
pub mod reply;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use forward_names::ForwardNames;
pub use record_type::RecordType;
pub use reply::{Reply, ReplyCode, DEFAULT_TTL};
