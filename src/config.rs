//! Configuration management for the Cragline client layer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage the Sirv API credentials and the public site base URL.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)
//!
//! Configuration is read exactly once into a [`SirvConfig`] snapshot which is
//! then injected into the client constructor. Call sites never reach into the
//! environment themselves.

use std::env;

use crate::{
    types::{Credentials, Privilege},
    warning,
};

/// Default base URL of the Sirv REST API.
pub const SIRV_API_BASE_URL: &str = "https://api.sirv.com/v2";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Reads a `.env` file if one is present and merges its values into the
/// process environment. Variables already set in the environment take
/// precedence over file values. A missing file is not an error: in a deployed
/// web process configuration usually arrives through real environment
/// variables.
///
/// # Returns
///
/// Returns `Ok(())` in all supported situations; the `Result` shape is kept
/// so startup code can `?` uniformly.
///
/// # Example
///
/// ```
/// use cragline::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Immutable process-wide configuration snapshot for the Sirv client.
///
/// Constructed once at process start (see [`SirvConfig::from_env`]) and passed
/// into [`crate::sirv::SirvClient::new`]. Both credential tiers are optional:
/// a tier with one or both halves missing is treated as absent, and token
/// acquisition for that tier is skipped without touching the network.
#[derive(Debug, Clone)]
pub struct SirvConfig {
    /// Base URL of the Sirv REST API, overridable for tests.
    pub api_base_url: String,
    /// Public base URL of the site, used for outbound links.
    pub public_base_url: String,
    /// Read-only credential pair, if configured.
    pub readonly: Option<Credentials>,
    /// Administrative credential pair, if configured.
    pub admin: Option<Credentials>,
}

impl SirvConfig {
    /// Builds the configuration snapshot from the process environment.
    ///
    /// Reads the following variables:
    ///
    /// - `SIRV_API_URL` - optional override of the Sirv API base URL
    /// - `SIRV_CLIENT_ID_RO` / `SIRV_CLIENT_SECRET_RO` - read-only tier
    /// - `SIRV_CLIENT_ID_ADMIN` / `SIRV_CLIENT_SECRET_ADMIN` - admin tier
    /// - `PUBLIC_BASE_URL` - public site base URL for outbound links
    ///
    /// For each credential tier, both halves of the pair must be present;
    /// a half-configured tier logs a warning and is treated as absent.
    ///
    /// # Example
    ///
    /// ```
    /// let config = SirvConfig::from_env();
    /// let client = SirvClient::new(config);
    /// ```
    pub fn from_env() -> Self {
        SirvConfig {
            api_base_url: env::var("SIRV_API_URL").unwrap_or_else(|_| SIRV_API_BASE_URL.into()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_default(),
            readonly: credential_pair("SIRV_CLIENT_ID_RO", "SIRV_CLIENT_SECRET_RO", "read-only"),
            admin: credential_pair("SIRV_CLIENT_ID_ADMIN", "SIRV_CLIENT_SECRET_ADMIN", "admin"),
        }
    }

    /// Returns the credential pair matching the requested privilege level,
    /// or `None` if that tier is not configured.
    pub fn credentials(&self, privilege: Privilege) -> Option<&Credentials> {
        match privilege {
            Privilege::ReadOnly => self.readonly.as_ref(),
            Privilege::Admin => self.admin.as_ref(),
        }
    }
}

/// Reads one credential tier from the environment.
///
/// Returns `Some` only when both the id and the secret are set. A tier with
/// exactly one half configured is almost certainly a deployment mistake, so
/// it is reported with a warning before being treated as absent.
fn credential_pair(id_var: &str, secret_var: &str, tier: &str) -> Option<Credentials> {
    let client_id = env::var(id_var).ok().filter(|v| !v.is_empty());
    let client_secret = env::var(secret_var).ok().filter(|v| !v.is_empty());

    match (client_id, client_secret) {
        (Some(client_id), Some(client_secret)) => Some(Credentials {
            client_id,
            client_secret,
        }),
        (None, None) => None,
        _ => {
            warning!(
                "Incomplete Sirv {} credentials: set both {} and {}",
                tier,
                id_var,
                secret_var
            );
            None
        }
    }
}
