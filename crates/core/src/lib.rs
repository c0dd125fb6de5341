//! Precios Unitarios Core - Shared types library.
//!
//! This crate provides common types used across all Precios Unitarios components:
//! - `frontend` - API client and navigation header
//! - `cli` - Command-line access to the backend API
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The types
//! mirror the JSON documents exchanged with the backend under `/api`, so they
//! can be used on either side of the network boundary.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, usernames, prices, session user and API payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
