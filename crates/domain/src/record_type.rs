use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,
    ANY,

    /// Any type code without a dedicated variant.
    Unknown(u16),
}

impl RecordType {
    /// A and AAAA are the only types answered with an address.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::ANY => "ANY",
            // RFC 3597 presentation form
            RecordType::Unknown(code) => return write!(f, "TYPE{}", code),
        };
        f.write_str(name)
    }
}
