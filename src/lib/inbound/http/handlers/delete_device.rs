use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::models::device::DeviceId;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::extract::ApiPath;
use crate::inbound::http::responses::{ApiError, ApiSuccess, ErrorResponseBody};

#[utoipa::path(
    delete,
    path = "/api/v1/user/devices/{id}",
    tag = "devices",
    summary = "Delete a device",
    params(("id" = i64, Path, description = "Device id")),
    responses(
        (status = 200, description = "Successfully deleted device with the given id"),
        (status = 400, description = "Validation failed", body = ErrorResponseBody),
        (status = 404, description = "Device not found", body = ErrorResponseBody),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn delete_device<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    let id = DeviceId::new(id);
    state.device_service.delete_device(&id).await?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        format!("Successfully deleted device with id {}", id),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/devices/bulk",
    tag = "admin",
    summary = "Delete every device, keeping brands",
    responses(
        (status = 200, description = "Successfully deleted all devices"),
        (status = 500, description = "Unexpected failure", body = ErrorResponseBody),
    )
)]
pub async fn delete_all_devices<BS: BrandService, DS: DeviceService>(
    State(state): State<AppState<BS, DS>>,
) -> Result<ApiSuccess<()>, ApiError> {
    state.device_service.delete_all_devices().await?;

    Ok(ApiSuccess::message(
        StatusCode::OK,
        "Successfully deleted all devices",
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::inbound::http::testutils::TestContext;

    #[tokio::test]
    async fn test_delete_device() {
        let context = TestContext::setup().await;
        let id = context.create_device("iPhone", "Apple").await["id"]
            .as_i64()
            .unwrap();

        let (status, body) = context
            .delete(&format!("/api/v1/user/devices/{}", id))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": format!("Successfully deleted device with id {}", id),
                "success": true,
            })
        );

        let (status, _) = context.get(&format!("/api/v1/user/devices/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_device_not_found() {
        let context = TestContext::setup().await;

        let (status, body) = context.delete("/api/v1/user/devices/31").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Device with id 31 not found");
    }

    #[tokio::test]
    async fn test_delete_all_devices_keeps_brands() {
        let context = TestContext::setup().await;
        context.create_device("iPhone", "Apple").await;
        context.create_device("Pixel", "Google").await;

        let (status, body) = context.delete("/api/v1/admin/devices/bulk").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully deleted all devices");

        let (_, devices) = context.get("/api/v1/admin/devices").await;
        let (_, brands) = context.get("/api/v1/user/brands").await;
        assert_eq!(devices["data"], json!([]));
        assert_eq!(brands["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_all_devices_when_empty() {
        let context = TestContext::setup().await;

        let (status, _) = context.delete("/api/v1/admin/devices/bulk").await;

        assert_eq!(status, StatusCode::OK);
    }
}
