use data_processor::{build_app, config::Config, logging, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let bind_socket = config.bind_socket();

    info!(
        port = config.port,
        processing_time_ms = config.processing_time_ms,
        processed_by = %config.host_id,
        "data processor starting on port {}, processing time {}ms",
        config.port,
        config.processing_time_ms
    );

    let app = build_app(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
