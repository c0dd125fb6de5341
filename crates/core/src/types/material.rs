//! Material catalog payloads.

use serde::{Deserialize, Serialize};

use super::{MaterialId, Price};

/// A catalog material (`GET /materiales`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub nombre: String,
    /// Unit of measure (e.g., "m3", "pza", "kg").
    pub unidad: String,
    /// Unit price.
    pub precio: Price,
}

/// Body of `POST /materiales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaterial {
    pub nombre: String,
    pub unidad: String,
    pub precio: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_material_from_backend_json() {
        let material: Material = serde_json::from_str(
            r#"{"id": 3, "nombre": "Cemento gris", "unidad": "bulto", "precio": 245.9}"#,
        )
        .unwrap();
        assert_eq!(material.id, MaterialId::new(3));
        assert_eq!(material.unidad, "bulto");
        assert_eq!(material.precio, Price::from_centavos(24_590));
    }

    #[test]
    fn test_new_material_body() {
        let body = NewMaterial {
            nombre: "Varilla 3/8".to_string(),
            unidad: "pza".to_string(),
            precio: Price::from_centavos(9_850),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["nombre"], "Varilla 3/8");
        assert_eq!(json["unidad"], "pza");
        assert!(json["precio"].is_number());
    }
}
