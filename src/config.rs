//! Server configuration read from the environment.
//!
//! Every setting has a default so the server starts with an empty
//! environment. Unparsable values fall back to the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to listen on (`PORT`).
    pub port: u16,
    /// Directory holding the built `pkg/` assets (`SITE_ROOT`). `None` uses
    /// the Leptos `site-root` setting.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { port, site_root }
    }
}
