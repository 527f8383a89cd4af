use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Prefix log lines with a timestamp.
    #[serde(default = "default_log_date")]
    pub log_date: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_date: default_log_date(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_date() -> bool {
    true
}
