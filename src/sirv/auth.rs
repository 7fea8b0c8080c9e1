use crate::{
    Res,
    types::{Privilege, TokenRequest, TokenResponse},
    warning,
};

use super::{SirvClient, op_error};

impl SirvClient {
    /// Obtains a short-lived bearer token from the Sirv token endpoint.
    ///
    /// Selects the credential pair matching the requested privilege level
    /// from the injected configuration. If that tier is not configured the
    /// function fails fast: it logs a warning and returns `Ok(None)` without
    /// contacting the network.
    ///
    /// # Arguments
    ///
    /// * `privilege` - Privilege tier the token is requested for. Read-only
    ///   covers search and stat operations; admin covers uploads, deletes and
    ///   directory management.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Some(String))` - The opaque token string from the response body
    /// - `Ok(None)` - The tier's credentials are absent; no request was made
    /// - `Err` - Transport failure, or a non-success status from the endpoint
    ///
    /// # Token Lifetime
    ///
    /// Sirv tokens are implicitly time-limited. This layer does not model or
    /// track expiry; operations request a fresh token unless the caller
    /// passes one in.
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.acquire_token(Privilege::ReadOnly).await?;
    /// match token {
    ///     Some(t) => println!("token: {}", t),
    ///     None => println!("read-only tier not configured"),
    /// }
    /// ```
    pub async fn acquire_token(&self, privilege: Privilege) -> Res<Option<String>> {
        let Some(credentials) = self.config.credentials(privilege) else {
            warning!(
                "Sirv {:?} credentials are not configured; skipping token request",
                privilege
            );
            return Ok(None);
        };

        let body = TokenRequest {
            client_id: credentials.client_id.clone(),
            client_secret: credentials.client_secret.clone(),
        };

        let response = self
            .http
            .post(self.endpoint("/token"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(op_error("acquire_token", response.status()));
        }

        let token: TokenResponse = response.json().await?;
        Ok(Some(token.token))
    }

    /// Resolves the token an operation should use.
    ///
    /// The contract shared by every file operation: a caller-supplied token
    /// wins; otherwise a token is acquired at the operation's privilege
    /// level, and an explicit error is raised when acquisition yields
    /// nothing (i.e. the tier is not configured).
    pub async fn resolve_token(&self, supplied: Option<String>, privilege: Privilege) -> Res<String> {
        if let Some(token) = supplied {
            return Ok(token);
        }

        match self.acquire_token(privilege).await? {
            Some(token) => Ok(token),
            None => Err("no Sirv token available: credentials are not configured".into()),
        }
    }
}
