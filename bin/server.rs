// Employee Service - Web Server
// REST API with Axum over the SQLite document store

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use employee_service::{logging, router, EmployeeService, ServerArgs, SqliteEmployeeRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    logging::init_logger(args.verbose);
    let config = args.into_config();

    // Open database
    let repository = SqliteEmployeeRepository::open(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.display()))?;

    // Wire repository -> service -> router once, at startup
    let service = EmployeeService::new(Arc::new(repository));
    let mut app = router(service);
    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    tracing::info!(addr = %config.addr, "server running");
    println!("🚀 Server running on http://{}", config.addr);
    println!("   API: http://{}/api/employees", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
