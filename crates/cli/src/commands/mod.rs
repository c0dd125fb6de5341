//! Command implementations.
//!
//! Every command runs against a [`Session`]: a client built from the
//! environment configuration, logged in first when credentials were given.

pub mod apu;
pub mod header;
pub mod materiales;
pub mod proyectos;
pub mod session;

use precios_unitarios_core::{CurrentUser, Username, UsernameError};
use precios_unitarios_frontend::api::{ApiClient, ApiError};
use precios_unitarios_frontend::config::{ConfigError, FrontendConfig};
use secrecy::SecretString;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Username flag is not a valid username.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Username given without a password.
    #[error("--password (or PU_PASSWORD) is required with --username")]
    MissingPassword,

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Output could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// The backend's own error text, when the failure came from the backend.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Api(e) => e.server_message(),
            _ => None,
        }
    }
}

/// Login credentials from flags or environment.
pub struct Credentials {
    pub username: Username,
    pub password: SecretString,
}

impl Credentials {
    /// Validate the credential flags. No username means anonymous.
    pub fn from_args(
        username: Option<String>,
        password: Option<SecretString>,
    ) -> Result<Option<Self>, CliError> {
        let Some(username) = username else {
            return Ok(None);
        };
        let username = Username::parse(&username)?;
        let password = password.ok_or(CliError::MissingPassword)?;
        Ok(Some(Self { username, password }))
    }
}

/// A configured client plus the user it is logged in as.
pub struct Session {
    pub client: ApiClient,
    pub config: FrontendConfig,
    pub user: Option<CurrentUser>,
}

/// Build the client and log in if credentials were given.
pub async fn connect(credentials: Option<&Credentials>) -> Result<Session, CliError> {
    let config = FrontendConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    tracing::debug!(base_url = %client.base_url(), "API client ready");

    let user = match credentials {
        Some(credentials) => {
            let response = client
                .login(&credentials.username, &credentials.password)
                .await?;
            tracing::info!(
                "Logged in as {} (admin: {})",
                response.user.username,
                response.user.is_admin
            );
            Some(response.user)
        }
        None => None,
    };

    Ok(Session {
        client,
        config,
        user,
    })
}

/// Print a value as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print raw text on stdout.
#[allow(clippy::print_stdout)]
pub fn print_text(text: &str) {
    println!("{text}");
}
