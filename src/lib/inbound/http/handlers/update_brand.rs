use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::models::brand::{BrandId, UpdateBrandRequest};
use crate::domain::brand::ports::BrandService;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::{ApiJson, ApiPath};
use crate::inbound::http::handlers::{BrandHttpRequestBody, BrandResponseData};
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};

#[utoipa::path(
    put,
    path = "/api/v1/user/brands/{id}",
    tag = "brands",
    summary = "Rename a brand",
    params(("id" = i64, Path, description = "Brand id")),
    request_body = BrandHttpRequestBody,
    responses(
        (status = 200, description = "Successfully updated brand", body = ResponseBody<BrandResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Brand not found", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn update_brand<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<BrandHttpRequestBody>,
) -> Result<ApiSuccess<BrandResponseData>, ApiError> {
    let domain_req = UpdateBrandRequest::new(body.try_into_name()?);
    state
        .brand_service
        .update_brand(&BrandId::new(id), &domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref brand| ApiSuccess::new(StatusCode::OK, "Successfully updated brand", brand.into()))
}
