//! AI-assisted commands.
//!
//! The configured timeout (`PU_REQUEST_TIMEOUT_SECS`) rides along as a
//! transport override.

use precios_unitarios_core::ApuChatRequest;
use precios_unitarios_frontend::api::TransportConfig;

use super::{CliError, Session, print_json};

fn timeout_override(session: &Session) -> Option<TransportConfig> {
    session
        .config
        .request_timeout
        .map(|timeout| TransportConfig::new().timeout(timeout))
}

/// Draft an analysis matrix and print it.
pub async fn draft(
    session: &Session,
    descripcion: String,
    unidad: Option<String>,
) -> Result<(), CliError> {
    let request = ApuChatRequest::new(descripcion, unidad);

    let response = session
        .client
        .chat_apu(&request, timeout_override(session))
        .await?;

    if response.insumos.is_empty() {
        tracing::warn!("Draft came back without rows");
    }
    print_json(&response)
}

/// Print the quotes for a material.
pub async fn cotizar(session: &Session, material: String) -> Result<(), CliError> {
    let cotizacion = session
        .client
        .cotizar(&material, timeout_override(session))
        .await?;

    print_json(&cotizacion.quotes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use precios_unitarios_frontend::api::ApiClient;
    use precios_unitarios_frontend::config::FrontendConfig;

    use super::*;

    fn session(request_timeout: Option<Duration>) -> Session {
        let config = FrontendConfig {
            request_timeout,
            ..FrontendConfig::default()
        };
        Session {
            client: ApiClient::new(&config).unwrap(),
            config,
            user: None,
        }
    }

    #[test]
    fn test_timeout_override_follows_config() {
        assert!(timeout_override(&session(None)).is_none());

        let config = timeout_override(&session(Some(Duration::from_secs(45)))).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }
}
