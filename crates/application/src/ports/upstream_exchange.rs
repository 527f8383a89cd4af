use async_trait::async_trait;
use hickory_proto::op::Message;
use stubdns_domain::DomainError;

#[async_trait]
pub trait UpstreamExchange: Send + Sync {
    /// Send `request` as-is to the upstream resolver and wait for its reply.
    ///
    /// Every call is a fresh exchange; nothing is cached or retried.
    async fn exchange(&self, request: &Message) -> Result<Message, DomainError>;
}
