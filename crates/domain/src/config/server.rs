use serde::Deserialize;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// UDP port the responder listens on, on all IPv4 interfaces.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Address returned for A queries that are not forwarded.
    #[serde(default = "default_ipv4", rename = "ip4")]
    pub static_ipv4: Ipv4Addr,

    /// Address returned for AAAA queries that are not forwarded.
    #[serde(default = "default_ipv6", rename = "ip6")]
    pub static_ipv6: Ipv6Addr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_ipv4: default_ipv4(),
            static_ipv6: default_ipv6(),
        }
    }
}

fn default_port() -> u16 {
    1053
}

fn default_ipv4() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

fn default_ipv6() -> Ipv6Addr {
    Ipv6Addr::LOCALHOST
}
