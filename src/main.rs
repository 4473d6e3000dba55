#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing `.env` is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let app = routes::app(&config).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "atelier listening");
    axum::serve(listener, app).await.expect("server failed");
}
