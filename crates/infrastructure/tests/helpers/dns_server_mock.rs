use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the fake upstream reacts to each datagram.
#[derive(Debug, Clone, Copy)]
pub enum MockBehaviour {
    /// Echo the question and answer with one A record.
    AnswerA { ip: Ipv4Addr, ttl: u32 },
    /// Same as `AnswerA` but with the transaction id flipped.
    WrongId { ip: Ipv4Addr, ttl: u32 },
    /// Read the query and never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behaviour: MockBehaviour) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], behaviour) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], behaviour: MockBehaviour) -> Option<Vec<u8>> {
        let (ip, ttl, flip_id) = match behaviour {
            MockBehaviour::AnswerA { ip, ttl } => (ip, ttl, false),
            MockBehaviour::WrongId { ip, ttl } => (ip, ttl, true),
            MockBehaviour::Silent => return None,
        };

        if query.len() < 12 {
            return None;
        }

        let mut response = Vec::with_capacity(512);

        if flip_id {
            response.extend_from_slice(&[!query[0], !query[1]]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR, RD, RA
        response.push(0x81);
        response.push(0x80);

        // QDCOUNT, ANCOUNT, NSCOUNT, ARCOUNT
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        // name pointer to the question, type A, class IN, TTL, RDLENGTH, RDATA
        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&ip.octets());

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_mock_server_responds() {
    let server = MockDnsServer::start(MockBehaviour::AnswerA {
        ip: Ipv4Addr::new(93, 184, 216, 34),
        ttl: 300,
    })
    .await
    .unwrap();

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let query = vec![
        0x12, 0x34, // id
        0x01, 0x00, // RD
        0x00, 0x00, // QDCOUNT
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    client.send_to(&query, server.addr()).await.unwrap();

    let mut buf = vec![0u8; 512];
    let (len, _) = client.recv_from(&mut buf).await.unwrap();

    assert!(len > 12, "Response should have at least header");
    assert_eq!(buf[0..2], query[0..2], "Transaction ID should match");
    assert_eq!(buf[2] & 0x80, 0x80, "QR bit should be set (response)");
    assert_eq!(server.received(), 1);

    server.shutdown();
}
