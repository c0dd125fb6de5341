//! Material catalog endpoints.

use precios_unitarios_core::{Material, NewMaterial};
use reqwest::Method;

use super::{ApiClient, ApiError, RequestOptions};

impl ApiClient {
    /// List the whole material catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list_materiales(&self) -> Result<Vec<Material>, ApiError> {
        self.get("/materiales").await
    }

    /// Add a material to the catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn create_material(&self, material: &NewMaterial) -> Result<Material, ApiError> {
        self.fetch_resource(
            "/materiales",
            RequestOptions::new().method(Method::POST).with_body(material),
        )
        .await
    }
}
