//! Saved project endpoints. All require a session.

use precios_unitarios_core::{MessageResponse, NewProyecto, Proyecto, ProyectoId};
use reqwest::Method;

use super::{ApiClient, ApiError, RequestOptions};

impl ApiClient {
    /// List the user's projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 401 without a session.
    pub async fn list_proyectos(&self) -> Result<Vec<Proyecto>, ApiError> {
        self.get("/proyectos").await
    }

    /// Save a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 401 without a session.
    pub async fn create_proyecto(&self, proyecto: &NewProyecto) -> Result<Proyecto, ApiError> {
        self.fetch_resource(
            "/proyectos",
            RequestOptions::new().method(Method::POST).with_body(proyecto),
        )
        .await
    }

    /// Delete one of the user's projects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 404 if the project does not
    /// exist or belongs to someone else.
    pub async fn delete_proyecto(&self, id: ProyectoId) -> Result<MessageResponse, ApiError> {
        self.fetch_resource(
            &format!("/proyectos/{id}"),
            RequestOptions::new().method(Method::DELETE),
        )
        .await
    }
}
