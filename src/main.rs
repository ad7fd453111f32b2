use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::database::DatabaseConfig;
use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::routes::create_router;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental - Sistema de alquiler de vehículos");
    info!("====================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Aplicar migraciones embebidas
    sqlx::migrate!().run(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Resumen del negocio");
    info!("👤 Clients:");
    info!("   GET  /api/clients - Listar clientes");
    info!("   POST /api/clients - Crear cliente");
    info!("   GET  /api/clients/:id - Obtener cliente");
    info!("   PUT  /api/clients/:id - Actualizar cliente (admin)");
    info!("   DELETE /api/clients/:id - Eliminar cliente (admin)");
    info!("🚗 Vehicles:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo (admin)");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo (admin)");
    info!("📋 Rentals:");
    info!("   GET  /api/rentals - Listar alquileres");
    info!("   POST /api/rentals - Crear alquiler");
    info!("   GET  /api/rentals/:id - Obtener alquiler");
    info!("   PUT  /api/rentals/:id - Actualizar alquiler (admin)");
    info!("   DELETE /api/rentals/:id - Eliminar alquiler (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
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
