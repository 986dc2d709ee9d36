use serde::Deserialize;

/// Settings loaded at startup from `config/*.yaml` and `APP_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
}
