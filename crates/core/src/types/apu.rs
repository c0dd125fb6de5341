//! Unit-price analysis (APU) payloads.
//!
//! The backend drafts an analysis matrix from a free-text concept and can
//! quote market prices for a material. Both are plain JSON documents.

use serde::{Deserialize, Serialize};

use super::Price;

/// Kind of input (insumo) in an analysis matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TipoInsumo {
    #[default]
    Material,
    #[serde(rename = "Mano de Obra", alias = "Mano de obra", alias = "ManoObra")]
    ManoObra,
    Equipo,
    Maquinaria,
    /// Any kind this client does not know about.
    #[serde(other)]
    Otro,
}

/// One row of the analysis matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insumo {
    #[serde(default)]
    pub tipo_insumo: TipoInsumo,
    pub nombre: String,
    pub unidad: String,
    pub cantidad: f64,
    /// Waste factor.
    pub merma: f64,
    pub flete_unitario: Price,
    /// Always zero in drafts; the user prices rows against the catalog.
    pub precio_unitario: Price,
    pub costo_unitario: Price,
    #[serde(default)]
    pub justificacion_breve: String,
    /// Catalog row the input is bound to, `0` when unbound.
    #[serde(default)]
    pub id_insumo: i32,
}

/// Body of `POST /ia/chat_apu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApuChatRequest {
    /// Free-text concept, e.g. "Muro de block 10x3".
    pub descripcion: String,
    /// Suggested unit of the concept.
    pub unidad: String,
}

impl ApuChatRequest {
    /// Unit used when the caller does not suggest one.
    pub const DEFAULT_UNIDAD: &'static str = "m2";

    #[must_use]
    pub fn new(descripcion: impl Into<String>, unidad: Option<String>) -> Self {
        Self {
            descripcion: descripcion.into(),
            unidad: unidad.unwrap_or_else(|| Self::DEFAULT_UNIDAD.to_string()),
        }
    }
}

/// Response of `POST /ia/chat_apu`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApuChatResponse {
    pub explicacion: Option<String>,
    #[serde(default)]
    pub insumos: Vec<Insumo>,
    /// Work quantity detected from dimensions in the concept, if any.
    pub cantidad_obra_detectada: Option<f64>,
    pub unidad_obra_detectada: Option<String>,
}

/// Body of `POST /ia/cotizar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CotizacionRequest {
    pub material: String,
}

/// Response of `POST /ia/cotizar`: up to three store quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cotizacion {
    pub tienda1: Option<String>,
    pub precio1: Option<Price>,
    pub tienda2: Option<String>,
    pub precio2: Option<Price>,
    pub tienda3: Option<String>,
    pub precio3: Option<Price>,
}

/// A single store quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub tienda: String,
    pub precio: Price,
}

impl Cotizacion {
    /// The quotes that carry both a store and a price, in response order.
    #[must_use]
    pub fn quotes(&self) -> Vec<Quote> {
        [
            (&self.tienda1, self.precio1),
            (&self.tienda2, self.precio2),
            (&self.tienda3, self.precio3),
        ]
        .into_iter()
        .filter_map(|(tienda, precio)| {
            Some(Quote {
                tienda: tienda.clone()?,
                precio: precio?,
            })
        })
        .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tipo_insumo_known_and_unknown() {
        let mano: TipoInsumo = serde_json::from_str(r#""Mano de Obra""#).unwrap();
        assert_eq!(mano, TipoInsumo::ManoObra);

        let alias: TipoInsumo = serde_json::from_str(r#""Mano de obra""#).unwrap();
        assert_eq!(alias, TipoInsumo::ManoObra);

        let otro: TipoInsumo = serde_json::from_str(r#""Herramienta""#).unwrap();
        assert_eq!(otro, TipoInsumo::Otro);
    }

    #[test]
    fn test_chat_request_default_unit() {
        let request = ApuChatRequest::new("Firme de concreto", None);
        assert_eq!(request.unidad, "m2");

        let request = ApuChatRequest::new("Excavación", Some("m3".to_string()));
        assert_eq!(request.unidad, "m3");
    }

    #[test]
    fn test_chat_response_from_backend_json() {
        let response: ApuChatResponse = serde_json::from_str(
            r#"{
                "explicacion": "Muro de 30 m2",
                "insumos": [{
                    "tipo_insumo": "Material",
                    "nombre": "Block 15x20x40",
                    "unidad": "pza",
                    "cantidad": 12.5,
                    "merma": 0.05,
                    "flete_unitario": 0.0,
                    "precio_unitario": 0.0,
                    "costo_unitario": 0.0,
                    "justificacion_breve": "12.5 piezas por m2",
                    "id_insumo": 0
                }],
                "cantidad_obra_detectada": 30.0,
                "unidad_obra_detectada": "m2"
            }"#,
        )
        .unwrap();

        assert_eq!(response.insumos.len(), 1);
        let insumo = &response.insumos[0];
        assert_eq!(insumo.tipo_insumo, TipoInsumo::Material);
        assert_eq!(insumo.precio_unitario, Price::ZERO);
        assert_eq!(response.cantidad_obra_detectada, Some(30.0));
    }

    #[test]
    fn test_chat_response_when_ai_failed() {
        let response: ApuChatResponse = serde_json::from_str(
            r#"{"explicacion": "Error en IA", "insumos": [],
                "cantidad_obra_detectada": null, "unidad_obra_detectada": null}"#,
        )
        .unwrap();
        assert!(response.insumos.is_empty());
        assert!(response.cantidad_obra_detectada.is_none());
    }

    #[test]
    fn test_quotes_skip_incomplete_pairs() {
        let cotizacion: Cotizacion = serde_json::from_str(
            r#"{"tienda1": "Home Depot", "precio1": 189.0,
                "tienda2": "Comex", "precio2": null,
                "tienda3": "Ferretería local", "precio3": 175.5}"#,
        )
        .unwrap();

        let quotes = cotizacion.quotes();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].tienda, "Home Depot");
        assert_eq!(quotes[1].precio, Price::from_centavos(17_550));
    }
}
