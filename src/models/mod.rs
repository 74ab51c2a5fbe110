//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod admin;
pub mod asset_issue;
pub mod garbage_asset;
pub mod registered_asset;
pub mod transfer_history;
