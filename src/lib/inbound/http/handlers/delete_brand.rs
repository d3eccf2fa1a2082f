use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::models::brand::BrandId;
use crate::domain::brand::ports::BrandService;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::ApiPath;
use crate::inbound::http::responses::{ApiError, ApiSuccess, ErrorResponseBody};

#[utoipa::path(
    delete,
    path = "/api/v1/user/brands/{id}",
    tag = "brands",
    summary = "Delete a brand no device refers to",
    params(("id" = i64, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Successfully deleted brand with the given id"),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Brand not found", body = ErrorResponseBody),
        (status = 500, description = "Brand still referenced by devices, or unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn delete_brand<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = BrandId::new(id);
    state.brand_service.delete_brand(&id).await?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        format!("Successfully deleted brand with id {}", id),
    ))
}
