use async_trait::async_trait;
use hickory_proto::op::{Header, Message, MessageType};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinDecodable;
use std::sync::Mutex;
use stubdns_application::ports::{DnsCodec, UpstreamExchange};
use stubdns_domain::DomainError;

/// Straight hickory encode/decode, like the production codec.
pub struct TestCodec;

impl DnsCodec for TestCodec {
    fn decode(&self, wire: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(wire).map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))
    }

    fn decode_header(&self, wire: &[u8]) -> Result<Header, DomainError> {
        Header::from_bytes(wire).map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))
    }

    fn encode(&self, message: &Message) -> Result<Vec<u8>, DomainError> {
        message
            .to_vec()
            .map_err(|e| DomainError::EncodeError(e.to_string()))
    }
}

/// Decodes normally but can never serialize a reply.
pub struct BrokenEncoderCodec;

impl DnsCodec for BrokenEncoderCodec {
    fn decode(&self, wire: &[u8]) -> Result<Message, DomainError> {
        TestCodec.decode(wire)
    }

    fn decode_header(&self, wire: &[u8]) -> Result<Header, DomainError> {
        TestCodec.decode_header(wire)
    }

    fn encode(&self, _message: &Message) -> Result<Vec<u8>, DomainError> {
        Err(DomainError::EncodeError("mock encoder failure".to_string()))
    }
}

enum Behaviour {
    Answer(Vec<Record>),
    Fail(DomainError),
}

/// Upstream fake that records every request it receives.
pub struct MockUpstream {
    behaviour: Behaviour,
    requests: Mutex<Vec<Message>>,
}

impl MockUpstream {
    pub fn answering(answers: Vec<Record>) -> Self {
        Self {
            behaviour: Behaviour::Answer(answers),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            behaviour: Behaviour::Fail(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self::failing(DomainError::TransportTimeout {
            server: "192.0.2.53:53".to_string(),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Message> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstream {
    async fn exchange(&self, request: &Message) -> Result<Message, DomainError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.behaviour {
            Behaviour::Answer(answers) => {
                let mut response = Message::new();
                response
                    .set_id(request.id())
                    .set_message_type(MessageType::Response);
                for query in request.queries() {
                    response.add_query(query.clone());
                }
                for answer in answers {
                    response.add_answer(answer.clone());
                }
                Ok(response)
            }
            Behaviour::Fail(error) => Err(error.clone()),
        }
    }
}
