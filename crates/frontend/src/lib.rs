//! Precios Unitarios Frontend library.
//!
//! Two independent pieces of the web frontend:
//!
//! - [`api`] - a thin typed client over the backend JSON API. One generic
//!   operation, [`api::ApiClient::fetch_resource`], plus typed per-endpoint
//!   wrappers built on it.
//! - [`components`] - server-rendered UI components, currently the
//!   navigation header.
//!
//! [`config`] resolves the API base address once at startup.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
