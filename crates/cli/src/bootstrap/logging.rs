use stubdns_domain::Config;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    install(&config.logging.level, config.logging.log_date);
}

/// Used before a configuration exists, so startup failures still get logged.
pub fn init_default_logging(log_date: bool) {
    install("info", log_date);
}

fn install(level: &str, log_date: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // try_init: a second call (e.g. after a failed config load) is a no-op.
    if log_date {
        let _ = builder.try_init();
    } else {
        let _ = builder.without_time().try_init();
    }
}
