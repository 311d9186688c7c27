use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub catalog_path: PathBuf,
    /// Generation-service credential. `None` routes every generation-backed
    /// call straight to its heuristic counterpart.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub generation_timeout_secs: u64,
    /// Image-service credential. `None` answers campaign image requests with
    /// a placeholder.
    pub image_api_key: Option<String>,
    pub image_base_url: String,
    pub image_model: String,
    /// Fixed seed for heuristic noise; `None` seeds from the OS per request.
    pub heuristic_seed: Option<u64>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field(
                "image_api_key",
                &self.image_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("image_base_url", &self.image_base_url)
            .field("image_model", &self.image_model)
            .field("heuristic_seed", &self.heuristic_seed)
            .finish()
    }
}
