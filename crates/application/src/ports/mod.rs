mod dns_codec;
mod upstream_exchange;

pub use dns_codec::DnsCodec;
pub use upstream_exchange::UpstreamExchange;
