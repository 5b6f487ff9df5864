use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections render as 400 `ErrorDto` responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
