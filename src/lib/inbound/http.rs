use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post, put};
use tokio::net;

use crate::domain::brand::ports::BrandService;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::handlers::{
    create_brand::create_brand,
    create_device::{create_device, create_devices},
    delete_brand::delete_brand,
    delete_device::{delete_all_devices, delete_device},
    get_brands::get_brands,
    get_devices::{get_all_devices, get_device, get_devices_by_brand, list_devices},
    update_brand::update_brand,
    update_device::{patch_device, update_device},
};

mod extract;
mod handlers;
mod openapi;
mod responses;
#[cfg(test)]
mod testutils;
mod validation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

#[derive(Debug, Clone)]
struct AppState<BS: BrandService, DS: DeviceService> {
    brand_service: Arc<BS>,
    device_service: Arc<DS>,
}

pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(
        brand_service: impl BrandService,
        device_service: impl DeviceService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let router = router(brand_service, device_service);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!("listening on {}", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

/// Builds the application router: every API route under `/api/v1` plus the OpenAPI document,
/// wrapped in request tracing.
pub fn router<BS: BrandService, DS: DeviceService>(
    brand_service: BS,
    device_service: DS,
) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let state = AppState {
        brand_service: Arc::new(brand_service),
        device_service: Arc::new(device_service),
    };

    axum::Router::new()
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .nest("/api/v1", api_routes())
        .layer(trace_layer)
        .with_state(state)
}

fn api_routes<BS: BrandService, DS: DeviceService>() -> Router<AppState<BS, DS>> {
    Router::new()
        .route("/admin/devices", get(get_all_devices))
        .route(
            "/admin/devices/bulk",
            post(create_devices).delete(delete_all_devices),
        )
        .route("/user/devices", get(list_devices).post(create_device))
        .route(
            "/user/devices/{id}",
            get(get_device)
                .put(update_device)
                .patch(patch_device)
                .delete(delete_device),
        )
        .route("/user/devices/brands/{brand}", get(get_devices_by_brand))
        .route("/user/brands", get(get_brands).post(create_brand))
        .route("/user/brands/{id}", put(update_brand).delete(delete_brand))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
