mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🖥️ IT Asset Management - API de gestión de activos");
    info!("==================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // El schema lleva las restricciones de unicidad del modelo de
    // concurrencia, tiene que estar aplicado antes de servir requests
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool, EnvironmentConfig::default());

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/registry", routes::registration_routes::create_registration_router())
        .nest("/api/assets", routes::asset_routes::create_asset_router())
        .nest("/api/transfers", routes::transfer_routes::create_transfer_router())
        .nest("/api/garbage", routes::garbage_routes::create_garbage_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .nest("/api/documents", routes::document_routes::create_document_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login de administrador");
    info!("   PUT  /api/auth/account - Actualizar cuenta");
    info!("📋 Registro de activos:");
    info!("   POST /api/registry - Registrar activo");
    info!("   GET  /api/registry - Listar activos registrados");
    info!("   GET  /api/registry/validate/:serial - Validar serial para asignación");
    info!("💼 Asignaciones:");
    info!("   POST /api/assets - Crear asignación");
    info!("   GET  /api/assets - Listar asignaciones");
    info!("   GET  /api/assets/by-employee - Buscar asignación por empleado");
    info!("   PUT  /api/assets/:id - Editar asignación");
    info!("   DELETE /api/assets/:id - Eliminar asignación");
    info!("🔄 Transferencias:");
    info!("   POST /api/transfers - Transferir activo (atómico)");
    info!("   GET  /api/transfers/history - Historial de transferencias");
    info!("🗑️ Bajas:");
    info!("   POST /api/garbage - Marcar activo como chatarra");
    info!("   GET  /api/garbage - Listar activos dados de baja");
    info!("📊 Reportes y dashboard:");
    info!("   GET  /api/reports - Reporte filtrado de asignaciones");
    info!("   GET  /api/dashboard/stats - Resumen del dashboard");
    info!("   GET  /api/dashboard/distribution - Distribución por categoría");
    info!("📄 Documentos:");
    info!("   POST /api/documents/handover-form - Generar formulario de entrega");
    info!("   POST /api/documents/handover-email - Enviar notificación por correo");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "IT Asset Management API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
