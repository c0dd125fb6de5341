//! Typed client for the backend JSON API.
//!
//! # Architecture
//!
//! - One generic operation, [`ApiClient::fetch_resource`], resolves a relative
//!   endpoint against the fixed base address, sends it with the requested verb
//!   and JSON body, and parses the response payload into the caller's type.
//! - Per-endpoint wrappers (`login`, `list_materiales`, ...) narrow the generic
//!   contract to fixed message types from `precios_unitarios_core`.
//! - No retry, no caching: every failure is returned to the caller as an
//!   [`ApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use precios_unitarios_frontend::api::{ApiClient, Method, RequestOptions};
//!
//! let client = ApiClient::new(&config)?;
//!
//! // Typed wrapper
//! let materiales = client.list_materiales().await?;
//!
//! // Generic call
//! let proyecto: Proyecto = client
//!     .fetch_resource(
//!         "/proyectos",
//!         RequestOptions::new().method(Method::POST).with_body(&nuevo),
//!     )
//!     .await?;
//! ```

mod auth;
mod client;
mod error;
mod ia;
mod materiales;
mod options;
mod proyectos;

pub use client::ApiClient;
pub use error::ApiError;
pub use options::{RequestOptions, TransportConfig};
pub use reqwest::Method;
