use crate::dns::codec::HickoryCodec;
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use hickory_proto::op::Message;
use std::time::Duration;
use stubdns_application::ports::{DnsCodec, UpstreamExchange};
use stubdns_domain::{DomainError, UpstreamConfig};
use tracing::debug;

/// Forwards a client's query, unchanged, to the configured upstream resolver.
pub struct DnsForwarder {
    transport: UdpTransport,
    codec: HickoryCodec,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(host, port),
            codec: HickoryCodec,
            timeout,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.host.clone(), config.port, config.timeout())
    }

    pub fn server(&self) -> String {
        self.transport.server()
    }
}

#[async_trait]
impl UpstreamExchange for DnsForwarder {
    async fn exchange(&self, request: &Message) -> Result<Message, DomainError> {
        let request_bytes = self.codec.encode(request)?;
        let response_bytes = self.transport.send(&request_bytes, self.timeout).await?;

        let response = self
            .codec
            .decode(&response_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        if response.id() != request.id() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "id mismatch: sent {}, received {}",
                request.id(),
                response.id()
            )));
        }

        debug!(
            server = %self.transport.server(),
            rcode = ?response.response_code(),
            answers = response.answers().len(),
            "Upstream response received"
        );

        Ok(response)
    }
}
