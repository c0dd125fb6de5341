//! Core types for Precios Unitarios.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! request/response payloads of the backend API.

pub mod apu;
pub mod auth;
pub mod id;
pub mod material;
pub mod price;
pub mod proyecto;
pub mod username;

pub use apu::{
    ApuChatRequest, ApuChatResponse, Cotizacion, CotizacionRequest, Insumo, Quote, TipoInsumo,
};
pub use auth::{CurrentUser, LoginResponse, MessageResponse};
pub use id::*;
pub use material::{Material, NewMaterial};
pub use price::Price;
pub use proyecto::{NewProyecto, Proyecto};
pub use username::{Username, UsernameError};
