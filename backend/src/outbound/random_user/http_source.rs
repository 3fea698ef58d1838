//! Reqwest-backed randomuser source adapter.
//!
//! This adapter owns transport details only: query construction, timeout and
//! HTTP error mapping, and JSON decoding into domain user records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::RandomUserResponseDto;
use crate::domain::UserRecord;
use crate::domain::ports::{UserBatchRequest, UserSource, UserSourceError};

const DEFAULT_USER_AGENT: &str = concat!("address-book/", env!("CARGO_PKG_VERSION"));

/// Randomuser source adapter that performs HTTP GET requests against one endpoint.
pub struct RandomUserHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl RandomUserHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// ```rust,ignore
    /// let endpoint = Url::parse("https://randomuser.me/api/")?;
    /// let source = RandomUserHttpSource::new(endpoint, Duration::from_secs(10))?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }

    fn request_url(&self, request: &UserBatchRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("seed", &request.seed)
            .append_pair("results", &request.results.to_string());
        url
    }
}

#[async_trait]
impl UserSource for RandomUserHttpSource {
    async fn fetch_users(
        &self,
        request: &UserBatchRequest,
    ) -> Result<Vec<UserRecord>, UserSourceError> {
        let response = self
            .client
            .get(self.request_url(request))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let users = parse_users(body.as_ref())?;
        debug!(
            seed = %request.seed,
            requested = request.results,
            received = users.len(),
            "fetched users"
        );
        Ok(users)
    }
}

/// Empty bodies and a JSON `null` decode to no users.
fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, UserSourceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let decoded: Option<RandomUserResponseDto> = serde_json::from_slice(body)
        .map_err(|error| UserSourceError::decode(format!("invalid user JSON payload: {error}")))?;
    decoded
        .unwrap_or_default()
        .into_domain_users()
        .map_err(UserSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            let message = if preview.is_empty() {
                format!("status {}", status.as_u16())
            } else {
                format!("status {}: {preview}", status.as_u16())
            };
            UserSourceError::timeout(message)
        }
        _ => UserSourceError::status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
