//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Truncated responses are returned
//! unchanged; there is no TCP retry.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use stubdns_domain::DomainError;
use tokio::net::{lookup_host, UdpSocket};
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP to a single upstream, addressed by IP literal or hostname.
pub struct UdpTransport {
    host: String,
    port: u16,
}

impl UdpTransport {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn server(&self) -> String {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }

    /// One request, one response. The whole exchange, including hostname
    /// resolution, must finish within `timeout`.
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server(),
            })?
    }

    async fn resolve(&self) -> Result<SocketAddr, DomainError> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| DomainError::UpstreamUnresolvable {
                host: self.host.clone(),
                reason: e.to_string(),
            })?
            .next()
            .ok_or_else(|| DomainError::UpstreamUnresolvable {
                host: self.host.clone(),
                reason: "no addresses".to_string(),
            })
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server_addr = self.resolve().await?;

        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            (std::net::Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        // Connected socket: datagrams from any other source are discarded.
        socket.connect(server_addr).await.map_err(|e| {
            DomainError::IoError(format!("Failed to connect to {}: {}", server_addr, e))
        })?;

        let bytes_sent = socket.send(message_bytes).await.map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", server_addr, e))
        })?;

        debug!(server = %server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to receive UDP response from {}: {}",
                server_addr, e
            ))
        })?;

        recv_buf.truncate(bytes_received);

        debug!(server = %server_addr, bytes_received, "UDP response received");

        Ok(recv_buf)
    }
}
