//! Backend API client.

use std::sync::Arc;

use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::ApiError;
use super::options::RequestOptions;
use crate::config::FrontendConfig;

/// Client for the backend JSON API.
///
/// The base address and default headers are fixed at construction. Cloning
/// is cheap and clones share one connection pool and one cookie jar, so a
/// session cookie obtained through one clone is sent by all of them.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base address.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &FrontendConfig) -> Result<Self, ApiError> {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a client for an explicit base address.
    ///
    /// The address is used verbatim: endpoints are appended to it by plain
    /// string concatenation.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Cookie store: credentials go out with every request
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.into(),
            }),
        })
    }

    /// Get the base address every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute target for a relative endpoint.
    #[must_use]
    pub fn resolve_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.inner.base_url)
    }

    /// Issue a request and parse the response payload as `R`.
    ///
    /// Only the payload is returned, not the status or headers. A body-less
    /// response parses as JSON `null`, so `R = ()` or `Option<_>` fit
    /// endpoints that return nothing.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Request`] if the request cannot be sent or read
    /// - [`ApiError::Status`] if the backend answers with a non-success status
    /// - [`ApiError::Decode`] if the payload does not match `R`
    #[instrument(
        level = "debug",
        skip(self, options),
        fields(method = %options.method)
    )]
    pub async fn fetch_resource<R, B>(
        &self,
        endpoint: &str,
        options: RequestOptions<B>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize,
    {
        let request = self.request_builder(endpoint, &options);
        let response = request.send().await?;
        let status = response.status();

        debug!(status = status.as_u16(), "Response received");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "Failed to read error body");
                    String::new()
                }
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        parse_payload(&bytes)
    }

    /// `GET` an endpoint with default options.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_resource`].
    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.fetch_resource(endpoint, RequestOptions::new()).await
    }

    /// Build the request without sending it.
    ///
    /// Order matters: the body sets its content type first, then the
    /// transport override replaces whatever it names.
    fn request_builder<B: Serialize>(
        &self,
        endpoint: &str,
        options: &RequestOptions<B>,
    ) -> RequestBuilder {
        let mut builder = self
            .inner
            .client
            .request(options.method.clone(), self.resolve_url(endpoint));

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        if let Some(config) = &options.config {
            builder = config.apply(builder);
        }

        builder
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Parse a response payload, treating an empty body as `null`.
fn parse_payload<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"null").map_err(ApiError::Decode);
    }
    serde_json::from_slice(bytes).map_err(ApiError::Decode)
}
