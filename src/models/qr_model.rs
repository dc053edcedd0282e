use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct GenerateQrParams {
    // 2048 stays under the 2953-byte capacity of a version 40 / EC-L symbol
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,
}

#[derive(Serialize)]
pub struct QrCodeResponse {
    pub qr_code_url: String,
}
