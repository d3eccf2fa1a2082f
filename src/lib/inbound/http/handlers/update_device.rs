use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::models::device::DeviceId;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::{ApiJson, ApiPath};
use crate::inbound::http::handlers::{DeviceHttpRequestBody, DeviceResponseData};
use crate::inbound::http::responses::{
    ApiError, ApiSuccess, ErrorResponseBody, ResponseBody,
};

#[utoipa::path(
    put,
    path = "/api/v1/user/devices/{id}",
    tag = "devices",
    summary = "Replace the name and brand of a device",
    params(("id" = i64, Path, description = "Device id")),
    request_body = DeviceHttpRequestBody,
    responses(
        (status = 200, description = "Successfully updated device entity", body = ResponseBody<DeviceResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Device not found", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn update_device<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<DeviceHttpRequestBody>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let domain_req = body.try_into_update()?;
    state
        .device_service
        .update_device(&DeviceId::new(id), &domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref device| {
            ApiSuccess::new(
                StatusCode::OK,
                "Successfully updated device entity",
                device.into(),
            )
        })
}

#[utoipa::path(
    patch,
    path = "/api/v1/user/devices/{id}",
    tag = "devices",
    summary = "Change only the given fields of a device",
    params(("id" = i64, Path, description = "Device id")),
    request_body = DeviceHttpRequestBody,
    responses(
        (status = 200, description = "Successfully patched device entity", body = ResponseBody<DeviceResponseData>),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Device not found", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn patch_device<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<DeviceHttpRequestBody>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let domain_req = body.try_into_patch()?;
    state
        .device_service
        .patch_device(&DeviceId::new(id), &domain_req)
        .await
        .map_err(ApiError::from)
        .map(|ref device| {
            ApiSuccess::new(
                StatusCode::OK,
                "Successfully patched device entity",
                device.into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::inbound::http::testutils::TestContext;

    #[tokio::test]
    async fn test_update_device() {
        let context = TestContext::setup().await;
        let created = context.create_device("iPhone", "Apple").await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = context
            .put(
                &format!("/api/v1/user/devices/{}", id),
                json!({"name": "Pixel", "brand": "Google"}),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully updated device entity");
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["name"], "Pixel");
        assert_eq!(body["data"]["brand"], "Google");
        assert_eq!(body["data"]["creationTime"], created["creationTime"]);
    }

    #[tokio::test]
    async fn test_update_device_requires_every_field() {
        let context = TestContext::setup().await;
        let id = context.create_device("iPhone", "Apple").await["id"]
            .as_i64()
            .unwrap();

        let (status, body) = context
            .put(&format!("/api/v1/user/devices/{}", id), json!({"name": "Pixel"}))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"], json!({"brand": "Brand is required"}));
    }

    #[tokio::test]
    async fn test_update_device_not_found() {
        let context = TestContext::setup().await;

        let (status, body) = context
            .put(
                "/api/v1/user/devices/42",
                json!({"name": "Pixel", "brand": "Google"}),
            )
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], "Device with id 42 not found");
    }

    #[tokio::test]
    async fn test_patch_device_name_only() {
        let context = TestContext::setup().await;
        let created = context.create_device("iPhone", "Apple").await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = context
            .patch(
                &format!("/api/v1/user/devices/{}", id),
                json!({"name": "iPhone 16"}),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully patched device entity");
        assert_eq!(body["data"]["name"], "iPhone 16");
        assert_eq!(body["data"]["brand"], "Apple");
        assert_eq!(body["data"]["creationTime"], created["creationTime"]);
    }

    #[tokio::test]
    async fn test_patch_device_brand_only() {
        let context = TestContext::setup().await;
        let id = context.create_device("Galaxy", "Samsung").await["id"]
            .as_i64()
            .unwrap();

        let (status, body) = context
            .patch(
                &format!("/api/v1/user/devices/{}", id),
                json!({"brand": "Google"}),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Galaxy");
        assert_eq!(body["data"]["brand"], "Google");
    }

    #[tokio::test]
    async fn test_patch_device_invalid_present_field() {
        let context = TestContext::setup().await;
        let id = context.create_device("Galaxy", "Samsung").await["id"]
            .as_i64()
            .unwrap();

        let (status, body) = context
            .patch(&format!("/api/v1/user/devices/{}", id), json!({"name": "G"}))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["data"],
            json!({"name": "Device name must be between 2 and 50 characters"})
        );

        let (_, stored) = context.get(&format!("/api/v1/user/devices/{}", id)).await;
        assert_eq!(stored["data"]["name"], "Galaxy");
    }

    #[tokio::test]
    async fn test_patch_device_not_found() {
        let context = TestContext::setup().await;

        let (status, _) = context
            .patch("/api/v1/user/devices/5", json!({"name": "Pixel"}))
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
