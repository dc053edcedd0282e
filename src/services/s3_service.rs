use crate::config::Config;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::{config::Region, Client};
use std::error::Error;

/// Write access to the object storage backend.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` under `key`. Overwriting an existing key is not an
    /// error; the newer object replaces the older one.
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

pub struct S3Service {
    config: Config,
    client: Client,
}

impl S3Service {
    pub async fn new(config: Config) -> Self {
        let credentials = Credentials::new(
            config.aws_access_key.clone(),
            config.aws_secret_key.clone(),
            None,
            None,
            "static",
        );

        let region = Region::new(config.aws_region.clone());

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .load()
            .await;

        let client = Client::new(&shared_config);

        Self { config, client }
    }
}

#[async_trait]
impl ObjectStorage for S3Service {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let bucket = &self.config.aws_bucket_name;

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(bytes.into())
            .content_type(content_type)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let err_msg = e.into_service_error();
                tracing::error!("S3 Upload Error: {:?}", err_msg);
                Err(format!("S3 Upload Failed: {}", err_msg).into())
            }
        }
    }
}
