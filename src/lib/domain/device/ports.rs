use std::future::Future;

use crate::domain::device::models::device::{
    CreateDeviceError, CreateDeviceRequest, DeleteDeviceError, Device, DeviceId,
    GetAllDevicesError, GetDeviceError, PatchDeviceRequest, UpdateDeviceError,
    UpdateDeviceRequest,
};
use crate::domain::device::models::page::{Page, PageRequest};

/// `DeviceService` is the public API for the device domain.
pub trait DeviceService: Clone + Send + Sync + 'static {
    fn find_device_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Device, GetDeviceError>> + Send;

    fn find_all_devices(
        &self,
    ) -> impl Future<Output = Result<Vec<Device>, GetAllDevicesError>> + Send;

    fn find_devices_by_brand(
        &self,
        brand_name: &str,
    ) -> impl Future<Output = Result<Vec<Device>, GetAllDevicesError>> + Send;

    fn get_paginated_devices(
        &self,
        req: &PageRequest,
    ) -> impl Future<Output = Result<Page<Device>, GetAllDevicesError>> + Send;

    fn add_device(
        &self,
        req: &CreateDeviceRequest,
    ) -> impl Future<Output = Result<Device, CreateDeviceError>> + Send;

    fn update_device(
        &self,
        id: &DeviceId,
        req: &UpdateDeviceRequest,
    ) -> impl Future<Output = Result<Device, UpdateDeviceError>> + Send;

    fn patch_device(
        &self,
        id: &DeviceId,
        req: &PatchDeviceRequest,
    ) -> impl Future<Output = Result<Device, UpdateDeviceError>> + Send;

    fn delete_device(&self, id: &DeviceId)
    -> impl Future<Output = Result<(), DeleteDeviceError>> + Send;

    fn save_all_devices(
        &self,
        reqs: &[CreateDeviceRequest],
    ) -> impl Future<Output = Result<Vec<Device>, CreateDeviceError>> + Send;

    fn delete_all_devices(&self) -> impl Future<Output = Result<u64, DeleteDeviceError>> + Send;
}

/// `DeviceRepository` represents a store of device data. Every write that may create a brand
/// runs as a single transaction together with the device write.
pub trait DeviceRepository: Send + Sync + Clone + 'static {
    fn find_device_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Device, GetDeviceError>> + Send;

    fn find_all_devices(
        &self,
    ) -> impl Future<Output = Result<Vec<Device>, GetAllDevicesError>> + Send;

    fn find_devices_by_brand_name(
        &self,
        brand_name: &str,
    ) -> impl Future<Output = Result<Vec<Device>, GetAllDevicesError>> + Send;

    fn find_devices_page(
        &self,
        req: &PageRequest,
    ) -> impl Future<Output = Result<Page<Device>, GetAllDevicesError>> + Send;

    fn create_device(
        &self,
        req: &CreateDeviceRequest,
    ) -> impl Future<Output = Result<Device, CreateDeviceError>> + Send;

    fn create_devices(
        &self,
        reqs: &[CreateDeviceRequest],
    ) -> impl Future<Output = Result<Vec<Device>, CreateDeviceError>> + Send;

    fn update_device(
        &self,
        id: &DeviceId,
        req: &PatchDeviceRequest,
    ) -> impl Future<Output = Result<Device, UpdateDeviceError>> + Send;

    fn delete_device(&self, id: &DeviceId)
    -> impl Future<Output = Result<(), DeleteDeviceError>> + Send;

    /// Removes every device and returns how many were removed.
    fn delete_all_devices(&self) -> impl Future<Output = Result<u64, DeleteDeviceError>> + Send;
}
