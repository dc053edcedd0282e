use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::IntoResponse,
};
use validator::{Validate, ValidationErrors};

use crate::utils::api_response::ApiError;

/// Query extractor that runs `validator` rules before the handler sees the
/// payload. Rejections respond with 400 and the offending fields in `detail`.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Query string extraction
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                let message = format!("Invalid query string: {}", err.body_text());
                ApiError::bad_request(message).into_response()
            })?;

        // 2. Logic validation
        if let Err(e) = params.validate() {
            return Err(ApiError::bad_request(flatten_validation_errors(e)).into_response());
        }

        Ok(ValidatedQuery(params))
    }
}

// Collapse validator errors into one "field: message" list for the detail body
fn flatten_validation_errors(errors: ValidationErrors) -> String {
    let mut details = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for err in field_errors {
            let message = err
                .message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            details.push(format!("{}: {}", field, message));
        }
    }

    details.join("; ")
}
