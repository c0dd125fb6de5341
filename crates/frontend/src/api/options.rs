//! Per-request options.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};

/// Options for a single [`super::ApiClient::fetch_resource`] call.
///
/// All three fields are independent. `B` is the body payload type; it
/// defaults to `()` for body-less requests.
#[derive(Debug, Clone)]
pub struct RequestOptions<B = ()> {
    /// HTTP verb, `GET` unless set.
    pub method: Method,
    /// Payload serialized as JSON, if any.
    pub body: Option<B>,
    /// Transport settings applied after the client defaults.
    pub config: Option<TransportConfig>,
}

impl<B> Default for RequestOptions<B> {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            config: None,
        }
    }
}

impl RequestOptions {
    /// A body-less `GET`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> RequestOptions<B> {
    /// Set the HTTP verb.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Attach a JSON body, changing the body type.
    #[must_use]
    pub fn with_body<C>(self, body: C) -> RequestOptions<C> {
        RequestOptions {
            method: self.method,
            body: Some(body),
            config: self.config,
        }
    }

    /// Attach a transport override.
    #[must_use]
    pub fn config(mut self, config: TransportConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Low-level transport settings merged on top of the client defaults.
///
/// Override values win: a header set here replaces a default header with the
/// same name (including `Content-Type`).
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Headers replacing or extending the defaults.
    pub headers: HeaderMap,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// Total request timeout. None means wait indefinitely.
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// An override that changes nothing until configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any previous value for the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Bound the whole request (connect, send, and read).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Apply the override to a request. Runs after the body is attached so
    /// header overrides take precedence over the body's content type.
    pub(crate) fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if !self.headers.is_empty() {
            builder = builder.headers(self.headers.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::CONTENT_TYPE;

    use super::*;

    #[test]
    fn test_default_is_get_without_body() {
        let options = RequestOptions::new();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert!(options.config.is_none());
    }

    #[test]
    fn test_with_body_keeps_method_and_config() {
        let options = RequestOptions::new()
            .method(Method::PUT)
            .config(TransportConfig::new().query("page", "2"))
            .with_body(vec![1, 2, 3]);

        assert_eq!(options.method, Method::PUT);
        assert_eq!(options.body, Some(vec![1, 2, 3]));
        assert_eq!(
            options.config.map(|c| c.query),
            Some(vec![("page".to_string(), "2".to_string())])
        );
    }

    #[test]
    fn test_header_replaces_previous_value() {
        let config = TransportConfig::new()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(CONTENT_TYPE, HeaderValue::from_static("text/csv"));

        assert_eq!(config.headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(config.headers[CONTENT_TYPE], "text/csv");
    }

    #[test]
    fn test_timeout() {
        let config = TransportConfig::new().timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
