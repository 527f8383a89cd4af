use stubdns_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    debug!(?config, "Configuration resolved");
    Ok(config)
}
