use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::AppState;
use crate::handlers::health_check_handler;
use crate::handlers::qr_handler::generate_qr_handler;

pub fn create_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        // Allow requests from the frontend origins only
        .allow_origin(AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://qr-generator-frontend-service"),
        ]))
        // Allow any method
        .allow_methods(Any)
        // Allow any headers
        .allow_headers(Any);

    Router::new()
        .route("/generate-qr/", post(generate_qr_handler))
        // Health check
        .route("/health", get(health_check_handler))
        .layer(cors)
}
