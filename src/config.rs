use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ChronosError, ChronosResult};

/// Service settings, loadable from a JSON file. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Directory scanned for `.ttf`/`.otf`/`.ttc` faces before system fonts.
    pub fonts_dir: Option<PathBuf>,
    /// `"text","author"` CSV; the built-in table is used when unset or unreadable.
    pub quotes_csv: Option<PathBuf>,
    /// Seconds before the quote table is re-read.
    pub quote_ttl_secs: u64,
    /// HTTP listen address.
    pub bind: String,
    /// `max-age` for wallpaper responses.
    pub cache_max_age_secs: u64,
    /// Shorter `max-age` for the phone "today" endpoint.
    pub today_cache_max_age_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            fonts_dir: Some(PathBuf::from("fonts")),
            quotes_csv: Some(PathBuf::from("quotes.csv")),
            quote_ttl_secs: 86_400,
            bind: "127.0.0.1:3000".to_owned(),
            cache_max_age_secs: 3_600,
            today_cache_max_age_secs: 600,
        }
    }
}

impl ServiceConfig {
    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> ChronosResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ChronosError::serde(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> ChronosResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ChronosError::resource_missing(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check value ranges and the bind address.
    pub fn validate(&self) -> ChronosResult<()> {
        if self.quote_ttl_secs == 0 {
            return Err(ChronosError::invalid_parameter("quote_ttl_secs must be > 0"));
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> ChronosResult<SocketAddr> {
        self.bind.parse().map_err(|_| {
            ChronosError::invalid_parameter(format!("bind \"{}\" is not a socket address", self.bind))
        })
    }

    /// Quote cache TTL.
    pub fn quote_ttl(&self) -> Duration {
        Duration::from_secs(self.quote_ttl_secs)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
