//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to `Tera::new`, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Endpoint returning the full JSON array of users.
    pub users_url: String,
}
