//! # Configuration Management
//!
//! This module handles loading bridge configuration from environment variables.
//!
//! ## Environment Variables
//! - `PASSKEY_CEREMONY_TIMEOUT_SECS`: Upper bound, in seconds, on a single
//!   authenticator invocation. Unset or empty means no bound beyond the
//!   platform's own timeout. `0` is rejected.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const CEREMONY_TIMEOUT_VAR: &str = "PASSKEY_CEREMONY_TIMEOUT_SECS";

/// Bridge configuration
///
/// `Default` gives an unbounded ceremony: the user may take as long as the
/// authenticator allows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// How long one `create`/`get` may wait on the authenticator before it
    /// is treated as a platform timeout (surfaced as a cancellation).
    pub ceremony_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file first if one exists (dotenvy doesn't error if
    /// the file is missing).
    ///
    /// ## Example .env file
    /// ```text
    /// PASSKEY_CEREMONY_TIMEOUT_SECS=120
    /// ```
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_timeout_var(env::var(CEREMONY_TIMEOUT_VAR).ok().as_deref())
    }

    fn from_timeout_var(value: Option<&str>) -> Result<Self> {
        let ceremony_timeout = match value.map(str::trim) {
            None | Some("") => None,
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("{CEREMONY_TIMEOUT_VAR} must be a whole number of seconds, got {secs:?}"))?;
                anyhow::ensure!(secs > 0, "{CEREMONY_TIMEOUT_VAR} must be at least 1 second; leave it unset for no bound");
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Config { ceremony_timeout })
    }

    pub fn with_ceremony_timeout(mut self, timeout: Duration) -> Self {
        self.ceremony_timeout = Some(timeout);
        self
    }
}
