use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` body extractor whose rejections use the API error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
