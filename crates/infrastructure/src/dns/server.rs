//! UDP listener: one spawned task per datagram, drained on shutdown.

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use stubdns_application::use_cases::RespondToQueryUseCase;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info, warn};

/// Largest possible UDP payload, so a datagram is never cut short.
const MAX_DATAGRAM_SIZE: usize = 65535;

/// Create the listening socket. Must be called inside a tokio runtime.
pub fn bind_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

pub struct UdpDnsServer {
    socket: Arc<UdpSocket>,
    responder: Arc<RespondToQueryUseCase>,
}

impl UdpDnsServer {
    pub fn new(socket: UdpSocket, responder: Arc<RespondToQueryUseCase>) -> Self {
        Self {
            socket: Arc::new(socket),
            responder,
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serve until `shutdown` fires, then stop reading and wait for the
    /// queries already in flight to finish.
    pub async fn run(self, shutdown: CancellationToken) {
        let tracker = TaskTracker::new();
        let mut recv_buf = vec![0u8; MAX_DATAGRAM_SIZE];

        loop {
            let (n, from) = tokio::select! {
                _ = shutdown.cancelled() => break,
                received = self.socket.recv_from(&mut recv_buf) => match received {
                    Ok(received) => received,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        // e.g. ICMP port unreachable surfacing as ConnectionReset
                        error!(error = %e, "UDP recv error");
                        continue;
                    }
                },
            };

            let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
            let responder = self.responder.clone();
            let socket = self.socket.clone();

            tracker.spawn(async move {
                if let Some(response) = responder.execute(&query).await {
                    if let Err(e) = socket.send_to(&response, from).await {
                        warn!(client = %from, error = %e, "Failed to send DNS response");
                    }
                }
            });
        }

        tracker.close();
        info!(in_flight = tracker.len(), "DNS listener stopped, draining in-flight queries");
        tracker.wait().await;
    }
}
