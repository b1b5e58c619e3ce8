use std::net::SocketAddr;
use std::sync::Arc;

use daymark_server::app_state::AppState;
use daymark_server::cleanup::scheduler;
use daymark_server::data_access::data_context::DataContext;
use daymark_server::map_routes;
use daymark_server::settings::Settings;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daymark_server=info,info".into()),
        )
        .init();

    // ── Boot ───────────────────────────────────────────────────
    let settings = Settings::load().expect("Failed to load settings");

    let data_context = DataContext::new(&settings.database_path)
        .expect("Failed to open record store");

    let addr: SocketAddr = format!("{}:{}", settings.tcp_socket_binding, settings.tcp_socket_port)
        .parse()
        .expect("Invalid socket binding in settings");

    // ── Shared state ───────────────────────────────────────────
    let state = Arc::new(AppState {
        data_context: data_context.clone(),
        settings,
    });

    // ── Cleanup scheduler (background, off the request path) ───
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler_handle = scheduler::spawn(data_context, shutdown_rx);

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // ── Start ──────────────────────────────────────────────────
    info!("Server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Stop the scheduler; an in-flight sweep finishes first.
    let _ = shutdown_tx.send(true);
    let _ = scheduler_handle.await;
    info!("Shutdown complete");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    info!("Shutdown signal received");
}
