use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::handlers::BrandResponseData;
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};

#[utoipa::path(
    get,
    path = "/api/v1/user/brands",
    tag = "brands",
    summary = "List every brand",
    responses(
        (status = 200, description = "Successfully fetched brands", body = ResponseBody<Vec<BrandResponseData>>),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn get_brands<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
) -> Result<ApiSuccess<Vec<BrandResponseData>>, ApiError> {
    state
        .brand_service
        .find_all_brands()
        .await
        .map_err(ApiError::from)
        .map(|brands| {
            ApiSuccess::new(
                StatusCode::OK,
                "Successfully fetched brands",
                brands.iter().map(BrandResponseData::from).collect(),
            )
        })
}
