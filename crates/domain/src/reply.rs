use std::net::IpAddr;

/// TTL used whenever no positive TTL came back from upstream.
pub const DEFAULT_TTL: u32 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    Refused,
}

/// Outcome of the answer policy for one query, before it is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub ip: Option<IpAddr>,
    pub ttl: u32,
    pub rcode: ReplyCode,
}

impl Reply {
    /// A single-address answer. A zero TTL is replaced by [`DEFAULT_TTL`].
    pub fn answer(ip: IpAddr, ttl: u32) -> Self {
        Self {
            ip: Some(ip),
            ttl: if ttl == 0 { DEFAULT_TTL } else { ttl },
            rcode: ReplyCode::NoError,
        }
    }

    pub fn refused() -> Self {
        Self {
            ip: None,
            ttl: 0,
            rcode: ReplyCode::Refused,
        }
    }
}
