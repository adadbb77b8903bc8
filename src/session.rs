use crate::authentication::{BootstrapError, resolve_access_token};
use crate::configuration::Settings;
use crate::domain::{AccessToken, StoryId, StoryRequest};
use anyhow::Context;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

/// The one authenticated client every scenario talks through.
#[derive(Debug)]
pub struct Session {
    base_url: String,
    http_client: Client,
}

/// Status and raw body of a call, kept for the scenario assertions.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.body.contains(phrase)
    }
}

impl Session {
    /// `base_url` is used as given, see [`crate::configuration::ApiSettings::base_url`].
    pub fn new(base_url: &str, access_token: &AccessToken) -> Result<Self, anyhow::Error> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", access_token.expose_secret()))
                .context("The access token is not a valid header value.")?;
        authorization.set_sensitive(true);
        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, authorization);

        let http_client = Client::builder()
            .default_headers(default_headers)
            .build()
            .context("Failed to build the HTTP client.")?;
        Ok(Self {
            base_url: base_url.to_string(),
            http_client,
        })
    }

    /// Resolve the configured credential and build the session around it.
    #[tracing::instrument(
        name = "Bootstrapping session",
        skip(configuration),
        fields(base_url = %configuration.api.base_url())
    )]
    pub async fn bootstrap(configuration: &Settings) -> Result<Self, BootstrapError> {
        let source = configuration
            .credential
            .source()
            .map_err(|e| BootstrapError::MissingCredential(anyhow::anyhow!(e)))?;
        let access_token = resolve_access_token(&source, configuration.api.base_url()).await?;
        let session = Session::new(configuration.api.base_url(), &access_token)?;
        tracing::info!("Session is ready");
        Ok(session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Creating story", skip(self))]
    pub async fn create_story(&self, story: &StoryRequest) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Story/Create", self.base_url);
        let response = self.http_client.post(&url).json(story).send().await?;
        read_response(response).await
    }

    /// `lookup_story_id` is sent as the `storyId` query parameter when present.
    #[tracing::instrument(name = "Editing story", skip(self, story))]
    pub async fn edit_story(
        &self,
        story_id: &StoryId,
        lookup_story_id: Option<&str>,
        story: &StoryRequest,
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Story/Edit/{}", self.base_url, story_id);
        let mut request = self.http_client.put(&url).json(story);
        if let Some(lookup_story_id) = lookup_story_id {
            request = request.query(&[("storyId", lookup_story_id)]);
        }
        read_response(request.send().await?).await
    }

    #[tracing::instrument(name = "Listing stories", skip(self))]
    pub async fn list_stories(&self) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Story/All", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        read_response(response).await
    }

    /// `lookup_story_id` is sent as the `storyId` query parameter when present.
    #[tracing::instrument(name = "Deleting story", skip(self))]
    pub async fn delete_story(
        &self,
        story_id: &StoryId,
        lookup_story_id: Option<&str>,
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = format!("{}/api/Story/Delete/{}", self.base_url, story_id);
        let mut request = self.http_client.delete(&url);
        if let Some(lookup_story_id) = lookup_story_id {
            request = request.query(&[("storyId", lookup_story_id)]);
        }
        read_response(request.send().await?).await
    }

    /// Release the client. Consuming `self` guarantees no scenario runs afterwards.
    pub fn close(self) {
        tracing::info!(base_url = %self.base_url, "Closing session");
    }
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse, reqwest::Error> {
    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(%status, %body, "Received response");
    Ok(ApiResponse { status, body })
}
