//! Wrappers around axum's extractors whose rejections are reported through [ApiError], so that a
//! malformed request gets the same error envelope as any other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::inbound::http::responses::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
