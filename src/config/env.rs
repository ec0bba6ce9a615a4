//! Environment variable readers.
//!
//! `.env` values are loaded into the process environment by `main.rs` before
//! any of these run, so both sources are seen here.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "*";

/// Read a variable, treating empty or whitespace-only values as unset.
pub(crate) fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn path_var(name: &str) -> Option<PathBuf> {
    var(name).map(PathBuf::from)
}

/// Read `PORT`, falling back to the default when unset.
pub(crate) fn port() -> Result<u16, Box<dyn std::error::Error>> {
    match var("PORT") {
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT value '{value}': {e}").into()),
        None => Ok(DEFAULT_PORT),
    }
}
