use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to serialize DNS message: {0}")]
    EncodeError(String),

    #[error("Upstream returned no answer records")]
    EmptyAnswer,

    #[error("Upstream answer is not an {expected} record; got {got}")]
    UnexpectedRecordType { expected: String, got: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Failed to resolve upstream host {host}: {reason}")]
    UpstreamUnresolvable { host: String, reason: String },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },
}
