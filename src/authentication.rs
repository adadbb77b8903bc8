use crate::configuration::CredentialSource;
use crate::domain::AccessToken;
use crate::telemetry::error_chain_fmt;
use anyhow::Context;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};

/// Everything that can go wrong before the first scenario runs. All of it is fatal.
#[derive(thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to authenticate. Status code: {status}, Content: {body}")]
    AuthenticationRejected { status: StatusCode, body: String },
    #[error("Failed to retrieve JWT token from the response")]
    MissingAccessToken(#[source] anyhow::Error),
    #[error("The configured static token cannot be used")]
    InvalidStaticToken(#[source] anyhow::Error),
    #[error("No usable credential is configured")]
    MissingCredential(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(serde::Serialize)]
struct AuthenticationRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticationResponse {
    access_token: Option<String>,
}

#[tracing::instrument(name = "Resolving access token", skip_all)]
pub async fn resolve_access_token(
    source: &CredentialSource,
    base_url: &str,
) -> Result<AccessToken, BootstrapError> {
    match source {
        CredentialSource::Static { token } => {
            tracing::info!("Using the configured static token");
            AccessToken::parse(token.expose_secret().clone())
                .map_err(|e| BootstrapError::InvalidStaticToken(anyhow::anyhow!(e)))
        }
        CredentialSource::Login { username, password } => {
            let credentials = Credentials {
                username: username.clone(),
                password: password.clone(),
            };
            request_access_token(base_url, &credentials).await
        }
    }
}

/// Exchange the credentials for a token with a throwaway, unauthenticated client.
#[tracing::instrument(
    name = "Requesting access token",
    skip(credentials),
    fields(username = %credentials.username)
)]
pub async fn request_access_token(
    base_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, BootstrapError> {
    let url = format!("{}/api/User/Authentication", base_url);
    let response = reqwest::Client::new()
        .post(&url)
        .json(&AuthenticationRequest {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
        })
        .send()
        .await
        .context("Failed to send the authentication request.")?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read the authentication response.")?;
    if status != StatusCode::OK {
        return Err(BootstrapError::AuthenticationRejected { status, body });
    }

    let access_token = serde_json::from_str::<AuthenticationResponse>(&body)
        .context("The authentication response is not the expected JSON object.")
        .and_then(|response| {
            response
                .access_token
                .ok_or_else(|| anyhow::anyhow!("The `accessToken` field is missing."))
        })
        .map_err(BootstrapError::MissingAccessToken)?;
    AccessToken::parse(access_token)
        .map_err(|e| BootstrapError::MissingAccessToken(anyhow::anyhow!(e)))
}
