mod config;
mod handlers;
mod models;
mod routes;
mod services;
mod utils;

use config::{AppState, Config};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting QR Generator API...");

    // S3 client is built once and shared across all requests
    println!("🪣 Initializing S3 client...");
    let s3_service = services::s3_service::S3Service::new(cfg.clone()).await;

    let state = AppState {
        config: cfg.clone(),
        storage: Arc::new(s3_service),
    };

    let app = routes::create_routes().with_state(state);

    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
