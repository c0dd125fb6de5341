//! Integration tests for Precios Unitarios.
//!
//! The tests drive `ApiClient` against a local mock of the backend API, so
//! they need no network access and no running backend.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p precios-unitarios-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_client` - Request shaping, cookies, and error mapping
//! - `app_header` - Header rendering for users returned by the backend

#![cfg_attr(not(test), forbid(unsafe_code))]
