//! Authentication API client methods

use super::{ClientError, EssayClient};
use essays_core::types::{Credentials, TokenResponse};
use essays_core::validation::validate_credentials;
use reqwest::Method;

impl EssayClient {
    /// Register a new account and start a session for it
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.authenticate("/user", credentials).await?;
        info!(username = %credentials.username, "Registered");
        Ok(())
    }

    /// Log in and start a session
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.authenticate("/user/login", credentials).await?;
        info!(username = %credentials.username, "Logged in");
        Ok(())
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials) -> Result<(), ClientError> {
        validate_credentials(credentials)?;

        // A stale token must not trigger a refresh here; a 401 just means bad credentials.
        let request = self.request(Method::POST, path).json(credentials);
        let token: TokenResponse = self.execute_once(request).await?;

        self.session()
            .establish(token.access_token, &credentials.username)?;
        Ok(())
    }

    /// Mint a new access token from the refresh cookie.
    ///
    /// Sends no body and no bearer header. On success the new token is stored
    /// in the session and returned.
    pub async fn refresh(&self) -> Result<String, ClientError> {
        let request = self.client.request(Method::POST, self.url("/user/refresh"));
        let token: TokenResponse = self.execute_once(request).await?;

        self.session().set_access_token(token.access_token.clone());
        info!("Access token refreshed");
        Ok(token.access_token)
    }

    /// End the session locally. The backend keeps no session state to revoke.
    pub fn logout(&self) {
        self.session().clear_tokens();
        info!("Logged out");
    }
}
