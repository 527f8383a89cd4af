use crate::di::DnsServices;
use std::net::{Ipv4Addr, SocketAddr};
use stubdns_infrastructure::dns::{bind_udp_socket, UdpDnsServer};
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_dns_server(
    services: DnsServices,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, services.config.server.port));

    info!(bind_address = %socket_addr, "Starting DNS server");

    let socket = bind_udp_socket(socket_addr)?;
    let server = UdpDnsServer::new(socket, services.responder);

    info!("DNS server ready on {}", server.local_addr()?);

    server.run(shutdown).await;
    Ok(())
}
