//! Core HTTP client for the Polly API

use compact_str::CompactString;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use super::{
    config::ClientConfig,
    error::{ClientError, Result},
};
use crate::domain::{Credentials, PageRequest, Poll, RegisterResponse};

/// Pure HTTP client for the Polly API
///
/// Every failure is reported as a tagged [`ClientError`]. Absorbing errors
/// into an empty result is left to [`super::PollyService`].
#[derive(Debug, Clone)]
pub struct PollyApi {
    client: Client,
    config: ClientConfig,
}

impl PollyApi {
    /// Build a client with its own transport from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.request.user_agent.as_str());
        if let Some(timeout) = config.request.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Transport)?;

        Ok(Self { client, config })
    }

    /// Build a client on top of an injected transport
    pub fn from_client(client: Client, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Register a new user with `POST /register`
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register_user(&self, credentials: &Credentials<'_>) -> Result<RegisterResponse> {
        let url = self.config.endpoint("register");
        let response = self
            .client
            .post(url.as_str())
            .json(credentials)
            .send()
            .await?;

        let (status, body) = self.read_response(response).await?;
        debug!(status = %status, "Successfully registered user");
        Ok(RegisterResponse { status, body })
    }

    /// Fetch one page of polls with `GET /polls`
    #[instrument(skip(self), fields(skip = page.skip, limit = page.limit))]
    pub async fn get_polls(&self, page: PageRequest) -> Result<Vec<Poll>> {
        let url = self.config.endpoint("polls");
        let response = self.client.get(url.as_str()).query(&page).send().await?;

        let polls: Vec<Poll> = self.handle_response(response).await?;
        debug!(poll_count = polls.len(), "Successfully fetched polls");
        Ok(polls)
    }

    /// Get current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Read the body and reject non-success statuses
    async fn read_response(&self, response: Response) -> Result<(StatusCode, CompactString)> {
        let url_path = CompactString::from(response.url().path());
        let status = response.status();
        let body = response.text().await?;

        trace!(path = %url_path, status = %status, body = %body, "Received response");

        if status.is_success() {
            Ok((status, body.into()))
        } else {
            Err(ClientError::http(url_path, status, &body))
        }
    }

    /// Handle HTTP response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url_path = CompactString::from(response.url().path());
        let (_, body) = self.read_response(response).await?;

        serde_json::from_str(&body).map_err(|e| ClientError::decode(url_path, e))
    }
}
