use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::models::device::CreateDeviceRequest;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::ApiJson;
use crate::inbound::http::handlers::{
    DeviceHttpRequestBody, DeviceResponseData, devices_response_data,
};
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};
use crate::inbound::http::validation::FieldErrors;

#[utoipa::path(
    post,
    path = "/api/v1/user/devices",
    tag = "devices",
    summary = "Create a device, creating its brand when missing",
    request_body = DeviceHttpRequestBody,
    responses(
        (status = 201, description = "Successfully created device", body = ResponseBody<DeviceResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn create_device<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiJson(body): ApiJson<DeviceHttpRequestBody>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let domain_req = body.try_into_create()?;
    state
        .device_service
        .add_device(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref device| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Successfully created device",
                device.into(),
            )
        })
}

/// Validates every element before anything is written; one invalid element rejects the batch.
fn try_into_create_all(
    bodies: Vec<DeviceHttpRequestBody>,
) -> Result<Vec<CreateDeviceRequest>, FieldErrors> {
    let mut errors = FieldErrors::default();
    let mut reqs = Vec::with_capacity(bodies.len());

    for (i, body) in bodies.into_iter().enumerate() {
        match body.try_into_create() {
            Ok(req) => reqs.push(req),
            Err(e) => errors.extend_prefixed(&format!("devices[{}]", i), e),
        }
    }

    if errors.is_empty() {
        Ok(reqs)
    } else {
        Err(errors)
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/devices/bulk",
    tag = "admin",
    summary = "Create many devices at once",
    request_body = Vec<DeviceHttpRequestBody>,
    responses(
        (status = 200, description = "All devices created", body = ResponseBody<Vec<DeviceResponseData>>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn create_devices<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiJson(bodies): ApiJson<Vec<DeviceHttpRequestBody>>,
) -> Result<ApiSuccess<Vec<DeviceResponseData>>, ApiError> {
    let domain_reqs = try_into_create_all(bodies)?;
    let devices = state.device_service.save_all_devices(&domain_reqs).await?;
    let total = devices.len() as u64;

    Ok(ApiSuccess::with_total(
        StatusCode::OK,
        "All devices created",
        devices_response_data(&devices),
        total,
    ))
}
