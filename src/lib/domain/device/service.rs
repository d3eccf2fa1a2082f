use crate::domain::device::models::device::{
    CreateDeviceError, CreateDeviceRequest, DeleteDeviceError, Device, DeviceId,
    GetAllDevicesError, GetDeviceError, PatchDeviceRequest, UpdateDeviceError,
    UpdateDeviceRequest,
};
use crate::domain::device::models::page::{Page, PageRequest};
use crate::domain::device::ports::{DeviceRepository, DeviceService};

/// Canonical implementation of the [DeviceService] port, through which the device domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<R: DeviceRepository> {
    repo: R,
}

impl<R: DeviceRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: DeviceRepository> DeviceService for Service<R> {
    async fn find_device_by_id(&self, id: &DeviceId) -> Result<Device, GetDeviceError> {
        tracing::info!(%id, "finding device");
        let result = self.repo.find_device_by_id(id).await;
        if let Err(GetDeviceError::NotFound { .. }) = &result {
            tracing::warn!(%id, "device not found");
        }

        result
    }

    async fn find_all_devices(&self) -> Result<Vec<Device>, GetAllDevicesError> {
        let devices = self.repo.find_all_devices().await?;
        tracing::info!(count = devices.len(), "retrieved devices");

        Ok(devices)
    }

    async fn find_devices_by_brand(
        &self,
        brand_name: &str,
    ) -> Result<Vec<Device>, GetAllDevicesError> {
        let devices = self.repo.find_devices_by_brand_name(brand_name).await?;
        tracing::info!(brand = brand_name, count = devices.len(), "retrieved devices by brand");

        Ok(devices)
    }

    async fn get_paginated_devices(
        &self,
        req: &PageRequest,
    ) -> Result<Page<Device>, GetAllDevicesError> {
        tracing::info!(page = req.page(), limit = req.limit(), "retrieving device page");
        let page = self.repo.find_devices_page(req).await?;
        tracing::info!(
            count = page.items().len(),
            total = page.total_elements(),
            "retrieved device page"
        );

        Ok(page)
    }

    async fn add_device(&self, req: &CreateDeviceRequest) -> Result<Device, CreateDeviceError> {
        let device = self.repo.create_device(req).await?;
        tracing::info!(
            id = %device.id(),
            name = %device.name(),
            brand = %device.brand().name(),
            "device added"
        );

        Ok(device)
    }

    async fn update_device(
        &self,
        id: &DeviceId,
        req: &UpdateDeviceRequest,
    ) -> Result<Device, UpdateDeviceError> {
        tracing::info!(%id, "updating device");
        let device = self.repo.update_device(id, &PatchDeviceRequest::from(req)).await?;
        tracing::info!(%id, "device updated");

        Ok(device)
    }

    async fn patch_device(
        &self,
        id: &DeviceId,
        req: &PatchDeviceRequest,
    ) -> Result<Device, UpdateDeviceError> {
        tracing::info!(
            %id,
            name = ?req.name().map(|n| n.as_str()),
            brand = ?req.brand().map(|b| b.as_str()),
            "patching device"
        );
        let device = self.repo.update_device(id, req).await?;
        tracing::info!(%id, "device patched");

        Ok(device)
    }

    async fn delete_device(&self, id: &DeviceId) -> Result<(), DeleteDeviceError> {
        tracing::info!(%id, "deleting device");
        self.repo.delete_device(id).await?;
        tracing::info!(%id, "device deleted");

        Ok(())
    }

    async fn save_all_devices(
        &self,
        reqs: &[CreateDeviceRequest],
    ) -> Result<Vec<Device>, CreateDeviceError> {
        tracing::info!(count = reqs.len(), "saving devices");
        let devices = self.repo.create_devices(reqs).await?;
        tracing::info!(count = devices.len(), "devices saved");

        Ok(devices)
    }

    async fn delete_all_devices(&self) -> Result<u64, DeleteDeviceError> {
        let deleted = self.repo.delete_all_devices().await?;
        tracing::info!(count = deleted, "deleted all devices");

        Ok(deleted)
    }
}
