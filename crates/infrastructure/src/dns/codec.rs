//! Wire codec backed by `hickory-proto`.

use hickory_proto::op::{Header, Message};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use stubdns_application::ports::DnsCodec;
use stubdns_domain::DomainError;

#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl DnsCodec for HickoryCodec {
    fn decode(&self, wire: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(wire).map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))
    }

    fn decode_header(&self, wire: &[u8]) -> Result<Header, DomainError> {
        Header::from_bytes(wire).map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))
    }

    fn encode(&self, message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::EncodeError(e.to_string()))?;
        Ok(buf)
    }
}
