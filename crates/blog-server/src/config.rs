use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Port used when neither the config file nor `PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Insert the sample post on startup so the list is never empty.
    pub seed_sample_post: bool,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            seed_sample_post: true,
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Replace the listen port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    /// Apply a raw `PORT` value, if one is set.
    pub fn with_port_var(self, value: Option<&str>) -> ServerResult<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(self),
            Some(raw) => {
                let port = raw
                    .parse::<u16>()
                    .map_err(|_| ServerError::Config(format!("invalid {PORT_ENV} value: {raw:?}")))?;
                Ok(self.with_port(port))
            }
        }
    }

    /// Apply the `PORT` environment variable.
    pub fn with_port_from_env(self) -> ServerResult<Self> {
        let value = std::env::var(PORT_ENV).ok();
        self.with_port_var(value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert!(c.seed_sample_post);
        assert_eq!(c.log_format, LogFormat::Text);
    }

    #[test]
    fn port_var_overrides_default() {
        let c = ServerConfig::default().with_port_var(Some("3000")).unwrap();
        assert_eq!(c.bind_addr.port(), 3000);
        assert_eq!(c.bind_addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn unset_or_blank_port_var_keeps_config() {
        let c = ServerConfig::default().with_port_var(None).unwrap();
        assert_eq!(c.bind_addr.port(), DEFAULT_PORT);
        let c = ServerConfig::default().with_port_var(Some("  ")).unwrap();
        assert_eq!(c.bind_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_var_is_config_error() {
        let err = ServerConfig::default().with_port_var(Some("eighty")).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(ServerConfig::default().with_port_var(Some("70000")).is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let c = ServerConfig::from_toml_str("seed_sample_post = false\n").unwrap();
        assert!(!c.seed_sample_post);
        assert_eq!(c.bind_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn full_toml() {
        let c = ServerConfig::from_toml_str(
            "bind_addr = \"127.0.0.1:9000\"\nseed_sample_post = true\nlog_format = \"json\"\n",
        )
        .unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn toml_output_parses_back() {
        let c = ServerConfig::default().with_port(1234);
        let text = c.to_toml_string().unwrap();
        assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        std::fs::write(&path, "bind_addr = \"127.0.0.1:4000\"\n").unwrap();
        let c = ServerConfig::from_file(&path).unwrap();
        assert_eq!(c.bind_addr.port(), 4000);

        let missing = ServerConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ServerError::Config(_))));
    }
}
