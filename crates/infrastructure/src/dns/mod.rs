pub mod codec;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use codec::HickoryCodec;
pub use forwarding::DnsForwarder;
pub use server::{bind_udp_socket, UdpDnsServer};
pub use transport::UdpTransport;
