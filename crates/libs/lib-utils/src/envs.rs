//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env::{self, VarError};

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|e| match e {
        VarError::NotPresent => Error::MissingEnv(name),
        VarError::NotUnicode(_) => Error::WrongFormat(name),
    })
}

/// Get an environment variable, falling back to `default` when unset.
///
/// A value that is set but not valid unicode is still an error.
pub fn get_env_or(name: &'static str, default: &str) -> Result<String, Error> {
    match get_env(name) {
        Err(Error::MissingEnv(_)) => Ok(default.to_string()),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("environment variable {0} has the wrong format")]
    WrongFormat(&'static str),
}
// endregion: --- Error
