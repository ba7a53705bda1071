//! Server configuration read from the environment.

use serde::Deserialize;

const PORT_FALLBACK_VAR: &str = "PORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Settings taken from `TODO_*` variables. A bare `PORT` is honoured when
/// `TODO_PORT` is unset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(rename = "log")]
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_filter: "todo_server=info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::from_vars(vars)
    }

    /// Build a config from an explicit set of variables.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(port) = vars.get(PORT_FALLBACK_VAR) {
            builder = builder.set_default("port", port.clone())?;
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TODO")
                .try_parsing(true)
                .ignore_empty(true)
                .source(Some(vars)),
        );

        builder.build()?.try_deserialize()
    }

    /// Host and port as a `ToSocketAddrs` pair, valid for IPv6 literals too.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
