//! AI-assisted analysis endpoints.
//!
//! These are slow: the backend waits on a language model. Both take an
//! optional [`TransportConfig`], usually carrying a timeout.

use precios_unitarios_core::{ApuChatRequest, ApuChatResponse, Cotizacion, CotizacionRequest};
use reqwest::Method;

use super::{ApiClient, ApiError, RequestOptions, TransportConfig};

impl ApiClient {
    /// Draft an analysis matrix for a free-text concept.
    ///
    /// The backend answers 200 even when the model fails; the draft then has
    /// no rows and `explicacion` says so.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn chat_apu(
        &self,
        request: &ApuChatRequest,
        config: Option<TransportConfig>,
    ) -> Result<ApuChatResponse, ApiError> {
        self.fetch_resource("/ia/chat_apu", post(request, config)).await
    }

    /// Ask for market quotes for a material.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 400 for an empty material and
    /// 500 when no model is configured.
    pub async fn cotizar(
        &self,
        material: &str,
        config: Option<TransportConfig>,
    ) -> Result<Cotizacion, ApiError> {
        let body = CotizacionRequest {
            material: material.to_string(),
        };

        self.fetch_resource("/ia/cotizar", post(&body, config)).await
    }
}

fn post<B>(body: B, config: Option<TransportConfig>) -> RequestOptions<B> {
    let mut options = RequestOptions::new().method(Method::POST).with_body(body);
    options.config = config;
    options
}
