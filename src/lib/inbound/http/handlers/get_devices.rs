use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::models::device::DeviceId;
use crate::domain::device::models::page::{MAX_ELEMENTS_PER_REQUEST, PageRequest};
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::{ApiPath, ApiQuery};
use crate::inbound::http::handlers::{DeviceResponseData, devices_response_data};
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};

/// Query string of the paginated listing. `offset` is accepted as an alias of `page`; both are a
/// zero-based page index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDevicesQuery {
    /// Zero-based page index, also accepted as `offset`.
    #[serde(default, alias = "offset")]
    #[param(default = 0)]
    page: u32,
    /// Page size, clamped into `1..=50`.
    #[serde(default = "default_limit")]
    #[param(default = 50)]
    limit: u32,
}

fn default_limit() -> u32 {
    MAX_ELEMENTS_PER_REQUEST
}

impl From<ListDevicesQuery> for PageRequest {
    fn from(query: ListDevicesQuery) -> Self {
        PageRequest::new(query.page, query.limit)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/devices",
    tag = "admin",
    summary = "List every device",
    responses(
        (status = 200, description = "All devices retrieved", body = ResponseBody<Vec<DeviceResponseData>>),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn get_all_devices<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
) -> Result<ApiSuccess<Vec<DeviceResponseData>>, ApiError> {
    let devices = state.device_service.find_all_devices().await?;
    let total = devices.len() as u64;

    Ok(ApiSuccess::with_total(
        StatusCode::OK,
        "All devices retrieved",
        devices_response_data(&devices),
        total,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/devices/{id}",
    tag = "devices",
    summary = "Get a device by id",
    params(("id" = i64, Path, description = "Device id")),
    responses(
        (status = 200, description = "Device retrieved successfully", body = ResponseBody<DeviceResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Device not found", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn get_device<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    state
        .device_service
        .find_device_by_id(&DeviceId::new(id))
        .await
        .map_err(ApiError::from)
        .map(|ref device| {
            ApiSuccess::new(StatusCode::OK, "Device retrieved successfully", device.into())
        })
}

#[utoipa::path(
    get,
    path = "/api/v1/user/devices/brands/{brand}",
    tag = "devices",
    summary = "List the devices of a brand",
    params(("brand" = String, Path, description = "Exact brand name")),
    responses(
        (status = 200, description = "Devices retrieved successfully", body = ResponseBody<Vec<DeviceResponseData>>),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn get_devices_by_brand<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(brand): ApiPath<String>,
) -> Result<ApiSuccess<Vec<DeviceResponseData>>, ApiError> {
    let devices = state.device_service.find_devices_by_brand(&brand).await?;
    let total = devices.len() as u64;

    Ok(ApiSuccess::with_total(
        StatusCode::OK,
        "Devices retrieved successfully",
        devices_response_data(&devices),
        total,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/devices",
    tag = "devices",
    summary = "List devices one page at a time",
    params(ListDevicesQuery),
    responses(
        (status = 200, description = "Successfully fetched devices", body = ResponseBody<Vec<DeviceResponseData>>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn list_devices<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiQuery(query): ApiQuery<ListDevicesQuery>,
) -> Result<ApiSuccess<Vec<DeviceResponseData>>, ApiError> {
    let page = state
        .device_service
        .get_paginated_devices(&query.into())
        .await?;

    Ok(ApiSuccess::with_total(
        StatusCode::OK,
        "Successfully fetched devices",
        devices_response_data(page.items()),
        page.total_elements(),
    ))
}
