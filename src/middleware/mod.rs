//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y otras funcionalidades
//! transversales del servidor.

pub mod cors;

pub use cors::*;
