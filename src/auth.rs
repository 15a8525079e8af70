//! Supabase Auth (GoTrue) client.
//!
//! Sign-in, sign-up, and password-reset requests are delegated entirely to
//! the provider; this client only maps HTTP outcomes into the typed
//! [`AuthError`] so the screens can surface the provider's own message.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

/// Error from the remote auth service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the request; the message is the provider's
    /// own human-readable detail.
    #[error("{message}")]
    Service { message: String },
    /// Transport-level failure before a provider response was received.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

/// An authenticated session as issued by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

/// GoTrue error bodies come in a few shapes; take whichever message field
/// is present.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Supabase Auth API client.
pub struct AuthClient {
    http_client: Client,
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http_client: Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Sign in with email and password (GoTrue password grant).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        info!("Auth sign-in request for {}", email);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&CredentialsRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_error_message(response).await;
            error!("Sign-in failed ({}): {}", status, message);
            return Err(AuthError::Service { message });
        }

        let session: Session = response.json().await?;
        info!("Sign-in succeeded for {}", email);
        Ok(session)
    }

    /// Register a new account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        info!("Auth sign-up request for {}", email);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&CredentialsRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_error_message(response).await;
            error!("Sign-up failed ({}): {}", status, message);
            return Err(AuthError::Service { message });
        }

        info!("Sign-up succeeded for {}", email);
        Ok(())
    }

    /// Ask the provider to send a password-reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/recover", self.base_url);
        info!("Password-reset request for {}", email);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&RecoverRequest { email })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = extract_error_message(response).await;
            error!("Password-reset request failed ({}): {}", status, message);
            return Err(AuthError::Service { message });
        }

        Ok(())
    }
}

/// Pull the human-readable message out of a GoTrue error response, falling
/// back to the raw body, then to the status line.
async fn extract_error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        if let Some(msg) = parsed.msg.or(parsed.error_description).or(parsed.error) {
            return msg;
        }
    }

    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = AuthClient::new("https://example.supabase.co/", "key");
        assert_eq!(client.base_url, "https://example.supabase.co");
    }

    #[test]
    fn service_error_displays_provider_message() {
        let err = AuthError::Service {
            message: "Invalid login credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid login credentials");
    }
}
