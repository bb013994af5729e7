//! Binary entrypoint for the convoflow HTTP server.
//!
//! Reads configuration from environment variables:
//! - `CONVOFLOW_PORT`: Server listen port (default: "3000")

use convoflow_server::router::build_router;
use convoflow_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("CONVOFLOW_PORT").unwrap_or_else(|_| "3000".to_string());

    let app = build_router(AppState::new());

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("convoflow server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
