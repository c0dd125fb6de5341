//! Saved project (budget) payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Price, ProyectoId};

/// Document type the backend assigns when none is given.
pub const DEFAULT_TIPO_DOCUMENTO: &str = "Presupuesto";

/// A saved project belonging to the logged-in user (`GET /proyectos`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proyecto {
    pub id: ProyectoId,
    pub nombre: String,
    /// Document kind, e.g. "Presupuesto".
    pub tipo_documento: Option<String>,
    pub descripcion: Option<String>,
    pub total: Price,
    /// Creation date (`YYYY-MM-DD`).
    pub fecha: NaiveDate,
    /// Free-form snapshot of the analysis that produced the project.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Body of `POST /proyectos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProyecto {
    pub nombre: String,
    pub tipo_documento: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub total: Price,
    /// Stored by the backend verbatim and echoed back as [`Proyecto::data`].
    pub config_completa: serde_json::Value,
}

impl NewProyecto {
    /// A budget with no description and an empty configuration.
    #[must_use]
    pub fn presupuesto(nombre: impl Into<String>, total: Price) -> Self {
        Self {
            nombre: nombre.into(),
            tipo_documento: DEFAULT_TIPO_DOCUMENTO.to_string(),
            descripcion: None,
            total,
            config_completa: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}
