//! # Application Configuration
//!
//! This module manages the submission API configuration loaded from environment
//! variables. Configuration is validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BIND_ADDRESS` | `127.0.0.1:3001` | Socket the HTTP server listens on |
//! | `SUBMISSIONS_DIR` | `data/submissions` | Directory receiving one JSON file per submission |
//! | `SITE_DIR` | unset | Built front end to serve as static files |
//! | `LOG_LEVEL` | `info` | `trace`, `debug`, `info`, `warn` or `error` |

use crate::error::{AppError, Result};
use lib_utils::envs::{self, get_env, get_env_or};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_SUBMISSIONS_DIR: &str = "data/submissions";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the server binds to, e.g. `127.0.0.1:3001`
    pub bind_address: String,

    /// Directory where submissions are written
    pub submissions_dir: PathBuf,

    /// Optional directory with the built site (index.html, wasm, css)
    pub site_dir: Option<PathBuf>,

    /// Lowercased tracing level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            submissions_dir: PathBuf::from(DEFAULT_SUBMISSIONS_DIR),
            site_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables take their defaults; a variable that is set but not
    /// valid unicode is an [`AppError::Config`].
    pub fn from_env() -> Result<Self> {
        let bind_address = get_env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;
        let submissions_dir =
            PathBuf::from(get_env_or("SUBMISSIONS_DIR", DEFAULT_SUBMISSIONS_DIR)?);
        let site_dir = match get_env("SITE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            Ok(_) | Err(envs::Error::MissingEnv(_)) => None,
            Err(e) => return Err(e.into()),
        };
        let log_level = get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL)?.to_lowercase();

        Ok(Self {
            bind_address,
            submissions_dir,
            site_dir,
            log_level,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        self.bind_address.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!(
                "BIND_ADDRESS must be a socket address like 127.0.0.1:3001: {}",
                e
            ))
        })?;

        if self.submissions_dir.as_os_str().is_empty() {
            return Err(AppError::Config("SUBMISSIONS_DIR must not be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "LOG_LEVEL must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
