use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Runtime configuration, read from the command line with environment
/// variable fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "triaxial", version, about = "Triaxial sensor reading service")]
pub struct ServerConfig {
    /// SQLite database file; created on first start.
    #[arg(long, env = "TRIAXIAL_DATABASE", default_value = "data.db")]
    pub database: PathBuf,

    /// Address the HTTP server listens on.
    #[arg(long, env = "TRIAXIAL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["triaxial"]).unwrap();

        assert_eq!(config.database, PathBuf::from("data.db"));
        assert_eq!(config.bind, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::try_parse_from([
            "triaxial",
            "--database",
            "/var/lib/triaxial/readings.sqlite3",
            "--bind",
            "0.0.0.0:9000",
        ])
        .unwrap();

        assert_eq!(
            config.database,
            PathBuf::from("/var/lib/triaxial/readings.sqlite3")
        );
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let result = ServerConfig::try_parse_from(["triaxial", "--bind", "not-an-address"]);

        assert!(result.is_err());
    }
}
