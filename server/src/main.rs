mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let addr = config.bind_addr();

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "inkly listening");
    axum::serve(listener, app).await.expect("server failed");
}
