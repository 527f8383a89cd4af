use hickory_proto::op::{Header, Message};
use stubdns_domain::DomainError;

/// Conversion between wire-format datagrams and structured DNS messages.
pub trait DnsCodec: Send + Sync {
    fn decode(&self, wire: &[u8]) -> Result<Message, DomainError>;

    /// Parse only the fixed 12-byte header. Used to refuse a datagram whose
    /// body is unreadable while still echoing its id.
    fn decode_header(&self, wire: &[u8]) -> Result<Header, DomainError>;

    fn encode(&self, message: &Message) -> Result<Vec<u8>, DomainError>;
}
