//! High-level Polly operations
//!
//! These wrap [`PollyApi`] and absorb every failure: the cause is written to
//! the log and the caller only sees `None`.

use tracing::{error, info, instrument};

use super::{api::PollyApi, config::ClientConfig, error::ClientError};
use crate::domain::{Credentials, PageRequest, Poll, RegisterResponse};

/// Service for Polly operations with a collapsed failure signal
#[derive(Debug, Clone)]
pub struct PollyService {
    api: PollyApi,
}

impl PollyService {
    /// Create service from existing API client
    pub fn from_api(api: PollyApi) -> Self {
        Self { api }
    }

    /// Create a service for the given base URL
    ///
    /// Returns `None` and logs the reason if the URL is unusable.
    pub fn connect(base_url: &str) -> Option<Self> {
        match PollyApi::new(ClientConfig::new(base_url)) {
            Ok(api) => Some(Self::from_api(api)),
            Err(e) => {
                log_failure("connect", &e);
                None
            },
        }
    }

    /// Register a user, returning the server's response on success
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Option<RegisterResponse> {
        info!("Registering user");

        match self
            .api
            .register_user(&Credentials::new(username, password))
            .await
        {
            Ok(response) => Some(response),
            Err(e) => {
                log_failure("register", &e);
                None
            },
        }
    }

    /// Fetch a single page of polls
    #[instrument(skip(self), fields(skip = page.skip, limit = page.limit))]
    pub async fn list_polls(&self, page: PageRequest) -> Option<Vec<Poll>> {
        info!("Fetching polls");

        match self.api.get_polls(page).await {
            Ok(polls) => Some(polls),
            Err(e) => {
                log_failure("list_polls", &e);
                None
            },
        }
    }

    /// Get reference to the underlying API client
    pub fn api(&self) -> &PollyApi {
        &self.api
    }
}

/// Register a user against `base_url`
///
/// Any failure (unusable URL, transport error, non-success status) is logged
/// and reported as `None`.
pub async fn register(
    base_url: &str,
    username: &str,
    password: &str,
) -> Option<RegisterResponse> {
    PollyService::connect(base_url)?
        .register(username, password)
        .await
}

/// Fetch one page of polls from `base_url`
///
/// `PageRequest::default()` asks for `skip=0, limit=10`. Transport errors,
/// non-success statuses and undecodable bodies are logged and reported as
/// `None`.
pub async fn list_polls(base_url: &str, page: PageRequest) -> Option<Vec<Poll>> {
    PollyService::connect(base_url)?.list_polls(page).await
}

fn log_failure(operation: &'static str, err: &ClientError) {
    match err {
        ClientError::Http { endpoint, status, .. } => error!(
            operation,
            kind = err.kind(),
            endpoint = %endpoint,
            status = status.as_u16(),
            error = %err,
            "Request rejected by server"
        ),
        ClientError::Decode { endpoint, .. } => error!(
            operation,
            kind = err.kind(),
            endpoint = %endpoint,
            error = %err,
            "Failed to decode JSON from response"
        ),
        _ => error!(
            operation,
            kind = err.kind(),
            error = %err,
            "An error occurred while contacting the server"
        ),
    }
}
