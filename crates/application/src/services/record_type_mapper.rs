//! Mapping from `hickory_proto::rr::RecordType` to `stubdns_domain::RecordType`.

use hickory_proto::rr::RecordType as HickoryRecordType;
use stubdns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Every hickory type maps to something; codes without a named variant
    /// become `RecordType::Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        match hickory_type {
            HickoryRecordType::A => RecordType::A,
            HickoryRecordType::AAAA => RecordType::AAAA,
            HickoryRecordType::CNAME => RecordType::CNAME,
            HickoryRecordType::MX => RecordType::MX,
            HickoryRecordType::TXT => RecordType::TXT,
            HickoryRecordType::PTR => RecordType::PTR,
            HickoryRecordType::ANY => RecordType::ANY,
            other => RecordType::Unknown(u16::from(other)),
        }
    }
}
