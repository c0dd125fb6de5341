//! Session endpoints.

use precios_unitarios_core::{CurrentUser, LoginResponse, MessageResponse, Username};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::instrument;

use super::{ApiClient, ApiError, RequestOptions};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Log in. On success the backend sets a session cookie that the client
    /// sends with every later request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 401 on bad credentials.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(
        &self,
        username: &Username,
        password: &SecretString,
    ) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.as_str(),
            password: password.expose_secret(),
        };

        self.fetch_resource(
            "/auth/login",
            RequestOptions::new().method(Method::POST).with_body(&body),
        )
        .await
    }

    /// End the session.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.fetch_resource("/auth/logout", RequestOptions::new().method(Method::POST))
            .await
    }

    /// The logged-in user, or `None` when there is no session.
    ///
    /// # Errors
    ///
    /// Returns error for any failure other than a 401.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        match self.get::<CurrentUser>("/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
