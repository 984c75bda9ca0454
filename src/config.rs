//! Process-wide settings.
//!
//! [`Settings`] is built once at startup by [`Settings::from_env`] and then
//! handed by reference (or inside an `Arc`) to whatever needs it. Nothing
//! mutates it afterwards.
//!
//! | Variable                 | Default                  |
//! |--------------------------|--------------------------|
//! | `OPENAI_API_KEY`         | `""` (empty)             |
//! | `OPENAI_BASE_URL`        | `https://api.openai.com` |
//! | `OPENAI_MODEL`           | `gpt-3.5-turbo`          |
//! | `HISTORICAL_EVENTS_HOST` | `0.0.0.0`                |
//! | `HISTORICAL_EVENTS_PORT` | `8000`                   |

use crate::logging::log_debug;
use std::fmt;
use std::path::Path;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Origins allowed to call the API from a browser.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = [
    "http://localhost:3000", // Frontend
    "http://localhost:4000", // Express backend
];

/// Immutable configuration shared by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential for the completion service. May be empty; the service
    /// then rejects calls with an authentication error.
    pub openai_api_key: String,
    /// Base URL of the OpenAI-compatible API, without the `/v1/...` path.
    pub openai_base_url: String,
    /// Model identifier sent with each completion request.
    pub openai_model: String,
    /// Origins accepted by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// Keep the key out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("has_openai_api_key", &!self.openai_api_key.is_empty())
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("cors_origins", &self.cors_origins)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults.
    ///
    /// Never fails: a missing API key only shows up once the completion
    /// service is called.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let openai_api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.openai_base_url);
        let openai_model = std::env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model);
        let host = std::env::var("HISTORICAL_EVENTS_HOST").unwrap_or(defaults.host);
        let port = std::env::var("HISTORICAL_EVENTS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let settings = Self {
            openai_api_key,
            openai_base_url,
            openai_model,
            cors_origins: defaults.cors_origins,
            host,
            port,
        };

        log_debug!(settings = ?settings, "Loaded settings from environment");
        settings
    }

    /// Address string for the listener, e.g. `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `../.env` and then `.env` into the process environment, if present.
///
/// Variables already set in the environment are left untouched, and the
/// first file wins over the second for keys they share.
pub fn load_dotenv() {
    load_dotenv_files(&[Path::new("../.env"), Path::new(".env")]);
}

/// Load each file in `paths` in order, skipping the ones that are missing
/// or unreadable. Returns how many were loaded.
pub fn load_dotenv_files(paths: &[&Path]) -> usize {
    let mut loaded = 0;
    for path in paths {
        match dotenv::from_path(path) {
            Ok(()) => {
                log_debug!(path = %path.display(), "Loaded environment file");
                loaded += 1;
            }
            Err(e) => {
                log_debug!(path = %path.display(), error = %e, "Skipped environment file");
            }
        }
    }
    loaded
}
