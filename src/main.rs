use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use estoque::logging::{init_tracing, shutdown_tracer};
use estoque::metrics::{init_metrics, metrics_app};
use estoque::router::init_router;
use estoque::state::init_app_state;
use estoque_config::ServerConfig;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();

    let state = init_app_state().await?;
    sqlx::migrate!("./migrations").run(&state.db).await?;
    info!("Migrations applied");

    if let Some(handle) = init_metrics()? {
        let metrics_listener = TcpListener::bind(server_config.metrics_addr()).await?;
        info!("📈 Metrics available at http://{}/metrics", server_config.metrics_addr());
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let listener = TcpListener::bind(server_config.api_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}/swagger-ui", addr);
    info!("📖 Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}
