use clap::Parser;

/// Smart waste bin status service.
#[derive(Debug, Clone, Parser)]
#[command(name = "binwatch")]
#[command(version)]
pub(crate) struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "BINWATCH_HOST", default_value = "127.0.0.1")]
    pub(crate) host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "BINWATCH_PORT", default_value_t = 8000)]
    pub(crate) port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "BINWATCH_LOG", default_value = "info")]
    pub(crate) log_level: String,
}

impl ServerConfig {
    /// `host:port` pair for the listener.
    pub(crate) fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost() {
        let config = ServerConfig::try_parse_from(["binwatch"]).expect("defaults parse");
        assert_eq!(config.addr(), "127.0.0.1:8000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "binwatch",
            "--host",
            "0.0.0.0",
            "--port",
            "9100",
            "--log-level",
            "debug",
        ])
        .expect("flags parse");
        assert_eq!(config.addr(), "0.0.0.0:9100");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(ServerConfig::try_parse_from(["binwatch", "--port", "http"]).is_err());
    }
}
