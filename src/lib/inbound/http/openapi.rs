use axum::Json;
use utoipa::OpenApi;

use crate::inbound::http::handlers::{
    BrandHttpRequestBody, BrandResponseData, DeviceHttpRequestBody, DeviceResponseData,
};
use crate::inbound::http::handlers::{
    create_brand, create_device, delete_brand, delete_device, get_brands, get_devices,
    update_brand, update_device,
};
use crate::inbound::http::responses::ErrorResponseBody;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Device Manager API",
        description = "Manage devices and the brands they belong to."
    ),
    paths(
        get_devices::get_all_devices,
        create_device::create_devices,
        delete_device::delete_all_devices,
        get_devices::list_devices,
        get_devices::get_device,
        get_devices::get_devices_by_brand,
        create_device::create_device,
        update_device::update_device,
        update_device::patch_device,
        delete_device::delete_device,
        get_brands::get_brands,
        create_brand::create_brand,
        update_brand::update_brand,
        delete_brand::delete_brand,
    ),
    components(schemas(
        DeviceResponseData,
        DeviceHttpRequestBody,
        BrandResponseData,
        BrandHttpRequestBody,
        ErrorResponseBody,
    )),
    tags(
        (name = "admin", description = "Bulk device administration"),
        (name = "devices", description = "Device operations"),
        (name = "brands", description = "Brand operations"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
