use std::sync::Arc;
use stubdns_application::use_cases::RespondToQueryUseCase;
use stubdns_domain::Config;
use stubdns_infrastructure::dns::{DnsForwarder, HickoryCodec};
use tracing::info;

pub struct DnsServices {
    pub config: Arc<Config>,
    pub responder: Arc<RespondToQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let forwarder = DnsForwarder::from_config(&config.upstream);

        info!(
            upstream = %forwarder.server(),
            timeout_ms = config.upstream.timeout_ms,
            "Upstream forwarder configured"
        );

        let responder = Arc::new(RespondToQueryUseCase::new(
            config.clone(),
            Arc::new(HickoryCodec),
            Arc::new(forwarder),
        ));

        Self { config, responder }
    }
}
