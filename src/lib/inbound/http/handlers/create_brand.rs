use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::models::brand::CreateBrandRequest;
use crate::domain::brand::ports::BrandService;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::{BrandHttpRequestBody, BrandResponseData};
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};

#[utoipa::path(
    post,
    path = "/api/v1/user/brands",
    tag = "brands",
    summary = "Create a brand",
    request_body = BrandHttpRequestBody,
    responses(
        (status = 201, description = "Successfully created brand", body = ResponseBody<BrandResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn create_brand<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiJson(body): ApiJson<BrandHttpRequestBody>,
) -> Result<ApiSuccess<BrandResponseData>, ApiError> {
    let domain_req = CreateBrandRequest::new(body.try_into_name()?);
    state
        .brand_service
        .add_brand(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref brand| {
            ApiSuccess::new(StatusCode::CREATED, "Successfully created brand", brand.into())
        })
}
