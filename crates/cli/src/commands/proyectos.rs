//! Saved project commands.

use precios_unitarios_core::ProyectoId;

use super::{CliError, Session, print_json};

/// List the user's projects.
pub async fn list(session: &Session) -> Result<(), CliError> {
    let proyectos = session.client.list_proyectos().await?;
    tracing::info!("{} project(s)", proyectos.len());
    print_json(&proyectos)
}

/// Delete a project by ID.
pub async fn delete(session: &Session, id: i32) -> Result<(), CliError> {
    let response = session.client.delete_proyecto(ProyectoId::new(id)).await?;
    tracing::info!("Project {id} deleted");
    print_json(&response)
}
