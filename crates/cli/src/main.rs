use clap::{ArgAction, Parser};
use stubdns_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "Minimal DNS responder: static A/AAAA answers with selective forwarding")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP port to listen on (default 1053)
    #[arg(long)]
    port: Option<u16>,

    /// Static IPv4 address returned for A queries (default 127.0.0.1)
    #[arg(long)]
    ip4: Option<String>,

    /// Static IPv6 address returned for AAAA queries (default ::1)
    #[arg(long)]
    ip6: Option<String>,

    /// Upstream resolver used for forwarded names (default 8.8.8.8)
    #[arg(long)]
    upstream: Option<String>,

    /// Comma-separated names forwarded to the upstream resolver
    #[arg(long)]
    forward: Option<String>,

    /// Prefix log lines with a timestamp (default true)
    #[arg(
        long,
        action = ArgAction::Set,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    log_date: Option<bool>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            ip4: self.ip4.clone(),
            ip6: self.ip6.clone(),
            upstream: self.upstream.clone(),
            forward: self.forward.clone(),
            log_date: self.log_date,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match bootstrap::load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            bootstrap::init_default_logging(cli.log_date.unwrap_or(true));
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    bootstrap::init_logging(&config);

    info!("Starting stubdns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        port = config.server.port,
        ip4 = %config.server.static_ipv4,
        ip6 = %config.server.static_ipv6,
        upstream = %config.upstream.host,
        forward = config.upstream.forward.len(),
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(config);

    let shutdown = CancellationToken::new();
    tokio::spawn(server::shutdown_signal(shutdown.clone()));

    server::start_dns_server(dns_services, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
