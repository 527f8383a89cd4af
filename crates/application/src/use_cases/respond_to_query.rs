use crate::ports::{DnsCodec, UpstreamExchange};
use crate::services::RecordTypeMapper;
use hickory_proto::op::{Header, Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;
use std::sync::Arc;
use stubdns_domain::{Config, DnsQuery, DomainError, RecordType, Reply, ReplyCode, DEFAULT_TTL};
use tracing::{error, info, warn};

/// Logged in place of an address when the query was not answered.
const REFUSED: &str = "(Refused)";

/// Answers one datagram: static address, forwarded address, or refusal.
///
/// Holds only the read-only configuration and two stateless ports, so a
/// single instance is shared by every in-flight query.
pub struct RespondToQueryUseCase {
    config: Arc<Config>,
    codec: Arc<dyn DnsCodec>,
    upstream: Arc<dyn UpstreamExchange>,
}

impl RespondToQueryUseCase {
    pub fn new(
        config: Arc<Config>,
        codec: Arc<dyn DnsCodec>,
        upstream: Arc<dyn UpstreamExchange>,
    ) -> Self {
        Self {
            config,
            codec,
            upstream,
        }
    }

    /// Returns the wire bytes to send back, or `None` when nothing should be
    /// sent (no readable header, or the reply could not be serialized).
    pub async fn execute(&self, wire: &[u8]) -> Option<Vec<u8>> {
        let request = match self.codec.decode(wire) {
            Ok(request) => request,
            Err(e) => return self.refuse_malformed(wire, &e),
        };

        let query = request.queries().first();
        let question = query.map(|q| {
            DnsQuery::new(
                q.name().to_ascii(),
                RecordTypeMapper::from_hickory(q.query_type()),
            )
        });

        let reply = match &question {
            Some(question) => self.resolve(&request, question).await,
            None => Reply::refused(),
        };

        log_outcome(question.as_ref(), &reply);
        self.encode(&build_response(request.header(), query, &reply))
    }

    async fn resolve(&self, request: &Message, question: &DnsQuery) -> Reply {
        if !question.record_type.is_address() {
            return Reply::refused();
        }

        let static_ip = if question.record_type == RecordType::A {
            IpAddr::V4(self.config.server.static_ipv4)
        } else {
            IpAddr::V6(self.config.server.static_ipv6)
        };

        if self.config.upstream.forward.contains(&question.name) {
            match self.forward(request, question.record_type).await {
                Ok((ip, ttl)) => return Reply::answer(ip, ttl),
                Err(e) => {
                    warn!(error = %e, name = %question.name, "Upstream forward failed, answering statically");
                }
            }
        }

        Reply::answer(static_ip, DEFAULT_TTL)
    }

    /// Only the first upstream answer is considered, and only when its type
    /// is the one asked for.
    async fn forward(
        &self,
        request: &Message,
        record_type: RecordType,
    ) -> Result<(IpAddr, u32), DomainError> {
        let response = self.upstream.exchange(request).await?;
        let first = response.answers().first().ok_or(DomainError::EmptyAnswer)?;

        match (record_type, first.data()) {
            (RecordType::A, RData::A(a)) => Ok((IpAddr::V4(a.0), first.ttl())),
            (RecordType::AAAA, RData::AAAA(aaaa)) => Ok((IpAddr::V6(aaaa.0), first.ttl())),
            (expected, _) => Err(DomainError::UnexpectedRecordType {
                expected: expected.to_string(),
                got: RecordTypeMapper::from_hickory(first.record_type()).to_string(),
            }),
        }
    }

    fn refuse_malformed(&self, wire: &[u8], cause: &DomainError) -> Option<Vec<u8>> {
        let reply = Reply::refused();
        log_outcome(None, &reply);

        match self.codec.decode_header(wire) {
            Ok(header) => {
                warn!(error = %cause, id = header.id(), "Malformed DNS query, refusing");
                self.encode(&build_response(&header, None, &reply))
            }
            Err(_) => {
                warn!(error = %cause, bytes = wire.len(), "Dropping datagram without a DNS header");
                None
            }
        }
    }

    fn encode(&self, response: &Message) -> Option<Vec<u8>> {
        match self.codec.encode(response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = response.id(), "Failed to serialize DNS response");
                None
            }
        }
    }
}

/// Mirror the request header, echo the question and attach at most one
/// answer. Both answers and refusals are marked authoritative.
fn build_response(request: &Header, query: Option<&Query>, reply: &Reply) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_checking_disabled(request.checking_disabled())
        .set_authoritative(true)
        .set_response_code(match reply.rcode {
            ReplyCode::NoError => ResponseCode::NoError,
            ReplyCode::Refused => ResponseCode::Refused,
        });

    if let Some(query) = query {
        response.add_query(query.clone());

        if let Some(ip) = reply.ip {
            let rdata = match ip {
                IpAddr::V4(ipv4) => RData::A(A(ipv4)),
                IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
            };
            response.add_answer(Record::from_rdata(query.name().clone(), reply.ttl, rdata));
        }
    }

    response
}

fn log_outcome(question: Option<&DnsQuery>, reply: &Reply) {
    let (record_type, name) = match question {
        Some(q) => (q.record_type.to_string(), q.name.as_ref()),
        None => ("NONE".to_string(), ""),
    };
    let answer = reply
        .ip
        .map_or_else(|| REFUSED.to_string(), |ip| ip.to_string());

    info!(record_type = %record_type, name = %name, answer = %answer, ttl = reply.ttl, "DNS");
}
