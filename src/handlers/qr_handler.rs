use axum::{extract::State, Json};

use crate::config::AppState;
use crate::models::qr_model::{GenerateQrParams, QrCodeResponse};
use crate::services::qr_service;
use crate::utils::api_response::ApiError;
use crate::utils::object_key::{derive_object_key, public_object_url};
use crate::utils::validated_wrapper::ValidatedQuery;

/// POST /generate-qr/?url=<string>
///
/// Encodes the URL as a QR PNG, stores it under its derived key, and returns
/// the public address of the stored object.
pub async fn generate_qr_handler(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<GenerateQrParams>,
) -> Result<Json<QrCodeResponse>, ApiError> {
    let png = match qr_service::generate_qr_png(&params.url) {
        Ok(png) => png,
        Err(e) => {
            tracing::error!("QR encoding error: {}", e);
            return Err(ApiError::internal(e.to_string()));
        }
    };

    let key = derive_object_key(&params.url);

    match state.storage.put_object(&key, png, "image/png").await {
        Ok(()) => {
            let qr_code_url = public_object_url(&state.config.aws_bucket_name, &key);
            Ok(Json(QrCodeResponse { qr_code_url }))
        }
        Err(e) => {
            tracing::error!("S3 upload error: {}", e);
            Err(ApiError::internal(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::{AppState, Config};
    use crate::routes::create_routes;
    use crate::services::s3_service::fake::InMemoryStorage;
    use crate::services::s3_service::ObjectStorage;

    fn test_config() -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            aws_access_key: "test-access-key".to_string(),
            aws_secret_key: "test-secret-key".to_string(),
            aws_bucket_name: "test-bucket".to_string(),
            aws_region: "us-east-1".to_string(),
        }
    }

    fn test_app(storage: Arc<dyn ObjectStorage>) -> axum::Router {
        let state = AppState { config: test_config(), storage };
        create_routes().with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn generate_qr_uploads_png_and_returns_public_url() {
        let storage = Arc::new(InMemoryStorage::new());
        let app = test_app(storage.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-qr/?url=https://example.com/page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["qr_code_url"],
            "https://test-bucket.s3.amazonaws.com/qr_codes/example.com/page.png"
        );

        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].key, "qr_codes/example.com/page.png");
        assert_eq!(uploads[0].content_type, "image/png");
        assert_eq!(&uploads[0].bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn colliding_urls_overwrite_the_same_key_without_error() {
        let storage = Arc::new(InMemoryStorage::new());

        for url in ["https://example.com/page", "http://example.com/page"] {
            let app = test_app(storage.clone());
            let response = app
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(format!("/generate-qr/?url={}", url))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].key, uploads[1].key);
    }

    #[tokio::test]
    async fn storage_failure_maps_to_500_with_detail() {
        let storage = Arc::new(InMemoryStorage::failing("connection refused"));
        let app = test_app(storage);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-qr/?url=https://example.com/page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "connection refused");
    }

    #[tokio::test]
    async fn missing_url_is_rejected_before_any_upload() {
        let storage = Arc::new(InMemoryStorage::new());
        let app = test_app(storage.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate-qr/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "url: This field is required");
        assert!(storage.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn oversized_url_is_rejected() {
        let storage = Arc::new(InMemoryStorage::new());
        let app = test_app(storage);

        let long_url = format!("https://example.com/{}", "x".repeat(2049));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/generate-qr/?url={}", long_url))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
