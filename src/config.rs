use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub bind_addr: String,
    pub templates_dir: String,
    pub static_dir: String,
    pub timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            bind_addr: "127.0.0.1:5000".to_string(),
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl AppConfig {
    /// Reads the process environment; call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("DICTIONARY_API_URL").unwrap_or(defaults.api_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            templates_dir: lookup("TEMPLATES_DIR").unwrap_or(defaults.templates_dir),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }
}
