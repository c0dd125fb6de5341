//! Precios Unitarios CLI - Command-line access to the backend API.
//!
//! # Usage
//!
//! ```bash
//! # Who am I? (logs in first when credentials are given)
//! pu-cli -u maria -p "$PASSWORD" me
//!
//! # Saved projects
//! pu-cli -u maria proyectos list
//! pu-cli -u maria proyectos delete 12
//!
//! # Material catalog
//! pu-cli materiales list
//! pu-cli materiales add --nombre "Cemento gris" --unidad bulto --precio 245.90
//!
//! # AI-assisted drafts
//! pu-cli apu "Muro de block 10x3" --unidad m2
//! pu-cli cotizar "Varilla 3/8"
//!
//! # Render the navigation header for the session user
//! pu-cli -u maria header --path /catalogo
//! ```
//!
//! # Environment Variables
//!
//! - `PU_API_BASE_URL` - Backend base address (see `FrontendConfig`)
//! - `PU_REQUEST_TIMEOUT_SECS` - Timeout for the AI commands
//! - `PU_USERNAME` / `PU_PASSWORD` - Credentials, instead of the flags
//! - `RUST_LOG` - Log filter (logs go to stderr)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{CliError, Credentials};

#[derive(Parser)]
#[command(name = "pu-cli")]
#[command(author, version, about = "Precios Unitarios CLI tools")]
struct Cli {
    /// Log in as this user before running the command
    #[arg(short, long, global = true, env = "PU_USERNAME")]
    username: Option<String>,

    /// Password for --username
    #[arg(short, long, global = true, env = "PU_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the session user
    Me,
    /// Manage saved projects
    Proyectos {
        #[command(subcommand)]
        action: ProyectosAction,
    },
    /// Manage the material catalog
    Materiales {
        #[command(subcommand)]
        action: MaterialesAction,
    },
    /// Draft a unit-price analysis for a concept
    Apu {
        /// Free-text concept, e.g. "Muro de block 10x3"
        descripcion: String,

        /// Suggested unit of the concept
        #[arg(long)]
        unidad: Option<String>,
    },
    /// Ask for market quotes for a material
    Cotizar {
        /// Material to quote
        material: String,
    },
    /// Render the navigation header HTML
    Header {
        /// Current location, used to mark the active link
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[derive(Subcommand)]
enum ProyectosAction {
    /// List saved projects
    List,
    /// Delete a project
    Delete {
        /// Project ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum MaterialesAction {
    /// List the catalog
    List,
    /// Add a material
    Add {
        /// Material name
        #[arg(short, long)]
        nombre: String,

        /// Unit of measure
        #[arg(short = 'U', long)]
        unidad: String,

        /// Unit price in MXN
        #[arg(long)]
        precio: Decimal,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "precios_unitarios_cli=info,precios_unitarios_frontend=info".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.server_message() {
            Some(message) => tracing::error!("Command failed: {e} ({message})"),
            None => tracing::error!("Command failed: {e}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let credentials = Credentials::from_args(cli.username, cli.password.map(SecretString::from))?;
    let session = commands::connect(credentials.as_ref()).await?;

    match cli.command {
        Commands::Me => commands::session::me(&session).await?,
        Commands::Proyectos { action } => match action {
            ProyectosAction::List => commands::proyectos::list(&session).await?,
            ProyectosAction::Delete { id } => commands::proyectos::delete(&session, id).await?,
        },
        Commands::Materiales { action } => match action {
            MaterialesAction::List => commands::materiales::list(&session).await?,
            MaterialesAction::Add {
                nombre,
                unidad,
                precio,
            } => commands::materiales::add(&session, nombre, unidad, precio).await?,
        },
        Commands::Apu {
            descripcion,
            unidad,
        } => commands::apu::draft(&session, descripcion, unidad).await?,
        Commands::Cotizar { material } => commands::apu::cotizar(&session, material).await?,
        Commands::Header { path } => commands::header::render(&session, &path)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_materiales_add() {
        let cli = Cli::try_parse_from([
            "pu-cli",
            "materiales",
            "add",
            "--nombre",
            "Cemento gris",
            "-U",
            "bulto",
            "--precio",
            "245.90",
        ])
        .unwrap();

        match cli.command {
            Commands::Materiales {
                action:
                    MaterialesAction::Add {
                        nombre,
                        unidad,
                        precio,
                    },
            } => {
                assert_eq!(nombre, "Cemento gris");
                assert_eq!(unidad, "bulto");
                assert_eq!(precio, Decimal::new(24_590, 2));
            }
            _ => panic!("expected materiales add"),
        }
    }

    #[test]
    fn test_global_credentials_after_subcommand() {
        let cli = Cli::try_parse_from(["pu-cli", "header", "--path", "/catalogo", "-u", "maria"])
            .unwrap();
        assert_eq!(cli.username.as_deref(), Some("maria"));
        assert!(matches!(cli.command, Commands::Header { ref path } if path == "/catalogo"));
    }

    #[test]
    fn test_header_path_defaults_to_root() {
        let cli = Cli::try_parse_from(["pu-cli", "header"]).unwrap();
        assert!(matches!(cli.command, Commands::Header { ref path } if path == "/"));
    }
}
