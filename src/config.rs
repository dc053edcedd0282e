use std::env;
use std::sync::Arc;

use crate::services::s3_service::ObjectStorage;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub aws_bucket_name: String,
    pub aws_region: String,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn ObjectStorage>,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let aws_access_key = env::var("AWS_ACCESS_KEY").expect("AWS_ACCESS_KEY must be set");
        let aws_secret_key = env::var("AWS_SECRET_KEY").expect("AWS_SECRET_KEY must be set");
        let aws_bucket_name = env::var("AWS_BUCKET_NAME").expect("AWS_BUCKET_NAME must be set");

        // us-east-1 matches the public https://<bucket>.s3.amazonaws.com addressing
        let aws_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        Config {
            server_host,
            server_port,
            aws_access_key,
            aws_secret_key,
            aws_bucket_name,
            aws_region,
        }
    }
}
