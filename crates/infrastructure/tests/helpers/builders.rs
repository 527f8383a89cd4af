use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use stubdns_application::use_cases::RespondToQueryUseCase;
use stubdns_domain::{CliOverrides, Config};
use stubdns_infrastructure::dns::{DnsForwarder, HickoryCodec};

pub const STATIC_V4: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);

pub fn query_message(name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(fastrand::u16(..))
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}

/// Config with `ip4=10.0.0.1`, the given forward list and an upstream on
/// localhost at `upstream_port`.
pub fn config(forward: &str, upstream_port: u16, timeout_ms: u64) -> Config {
    let mut config = Config::default();
    config
        .apply_cli_overrides(CliOverrides {
            ip4: Some(STATIC_V4.to_string()),
            upstream: Some("127.0.0.1".to_string()),
            forward: Some(forward.to_string()),
            ..CliOverrides::default()
        })
        .unwrap();
    config.upstream.port = upstream_port;
    config.upstream.timeout_ms = timeout_ms;
    config
}

pub fn responder(config: Config) -> Arc<RespondToQueryUseCase> {
    let forwarder = DnsForwarder::from_config(&config.upstream);
    Arc::new(RespondToQueryUseCase::new(
        Arc::new(config),
        Arc::new(HickoryCodec),
        Arc::new(forwarder),
    ))
}

/// Address and TTL of the only answer in `response`.
pub fn single_answer(response: &Message) -> (IpAddr, u32) {
    assert_eq!(response.answers().len(), 1, "expected exactly one answer");
    let record = &response.answers()[0];
    let ip = match record.data() {
        RData::A(a) => IpAddr::V4(a.0),
        RData::AAAA(aaaa) => IpAddr::V6(aaaa.0),
        other => panic!("unexpected answer data {:?}", other),
    };
    (ip, record.ttl())
}
