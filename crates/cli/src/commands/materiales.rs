//! Material catalog commands.

use precios_unitarios_core::{NewMaterial, Price};
use rust_decimal::Decimal;

use super::{CliError, Session, print_json};

/// List the catalog.
pub async fn list(session: &Session) -> Result<(), CliError> {
    let materiales = session.client.list_materiales().await?;
    print_json(&materiales)
}

/// Add a material and print the stored row.
pub async fn add(
    session: &Session,
    nombre: String,
    unidad: String,
    precio: Decimal,
) -> Result<(), CliError> {
    let material = NewMaterial {
        nombre,
        unidad,
        precio: Price::new(precio),
    };

    let created = session.client.create_material(&material).await?;
    tracing::info!("Material {} created at {}", created.id, created.precio);
    print_json(&created)
}
