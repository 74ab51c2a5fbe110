//! Services module
//!
//! Este módulo contiene los servicios que encapsulan integraciones
//! externas: plantillas de documentos y notificaciones por correo.

pub mod handover_service;
pub mod notification_service;
