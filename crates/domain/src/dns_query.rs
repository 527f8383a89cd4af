use super::RecordType;
use std::sync::Arc;

/// The single question a client asked, as decoded from the wire.
///
/// `name` is kept exactly as the codec presented it (fully qualified,
/// original case), because forward-name matching is byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
