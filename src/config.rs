// Configuration module
// Fixed server constants with optional file and environment overrides

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Directory the URL space maps onto, current-directory marker included.
    pub root: String,
    /// Entry document served for the root URL.
    pub index: String,
    /// Page paths listed in the startup banner.
    pub pages: Vec<String>,
}

impl Config {
    /// Load configuration from an optional `config.toml` plus `SERVER_`
    /// environment overrides. The defaults reproduce the server's fixed
    /// constants: wildcard bind on port 3000, files served from the
    /// working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", true)?
            .set_default("files.root", ".")?
            .set_default("files.index", "/index.html")?
            .set_default(
                "files.pages",
                vec![
                    "/".to_string(),
                    "/videoclases.html".to_string(),
                    "/videollamada.html".to_string(),
                ],
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
