use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use thiserror::Error;

use crate::domain::brand::models::brand::{Brand, BrandName};

/// Server-assigned device identifier.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct DeviceId(i64);

impl DeviceId {
    pub fn new(raw_id: i64) -> Self {
        Self(raw_id)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// Represents always valid device name: not blank and between
/// [DeviceName::MIN_LENGTH] and [DeviceName::MAX_LENGTH] characters long.
#[derive(Display, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceName(String);

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeviceNameError {
    #[error("Device name is required")]
    Empty,
    #[error(
        "Device name must be between {min} and {max} characters",
        min = DeviceName::MIN_LENGTH,
        max = DeviceName::MAX_LENGTH
    )]
    Length,
}

impl DeviceName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 50;

    pub fn new(raw_name: &str) -> Result<Self, DeviceNameError> {
        if raw_name.trim().is_empty() {
            return Err(DeviceNameError::Empty);
        }

        let length = raw_name.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(DeviceNameError::Length);
        }

        Ok(Self(raw_name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: DeviceName,
    brand: Brand,
    creation_time: DateTime<Utc>,
}

impl Device {
    pub fn new(id: DeviceId, name: DeviceName, brand: Brand, creation_time: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            brand,
            creation_time,
        }
    }

    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn creation_time(&self) -> &DateTime<Utc> {
        &self.creation_time
    }
}

/// Data required by the domain to create a [Device]. The brand is referenced by name and is
/// created on the fly when no brand with that name exists yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct CreateDeviceRequest {
    name: DeviceName,
    brand: BrandName,
}

impl CreateDeviceRequest {
    pub fn new(name: DeviceName, brand: BrandName) -> Self {
        Self { name, brand }
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn brand(&self) -> &BrandName {
        &self.brand
    }
}

/// Full replacement of the mutable fields of a [Device].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct UpdateDeviceRequest {
    name: DeviceName,
    brand: BrandName,
}

impl UpdateDeviceRequest {
    pub fn new(name: DeviceName, brand: BrandName) -> Self {
        Self { name, brand }
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn brand(&self) -> &BrandName {
        &self.brand
    }
}

/// Partial update of a [Device]. Fields left as `None` keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PatchDeviceRequest {
    name: Option<DeviceName>,
    brand: Option<BrandName>,
}

impl PatchDeviceRequest {
    pub fn new(name: Option<DeviceName>, brand: Option<BrandName>) -> Self {
        Self { name, brand }
    }

    pub fn name(&self) -> Option<&DeviceName> {
        self.name.as_ref()
    }

    pub fn brand(&self) -> Option<&BrandName> {
        self.brand.as_ref()
    }
}

impl From<&UpdateDeviceRequest> for PatchDeviceRequest {
    fn from(req: &UpdateDeviceRequest) -> Self {
        Self {
            name: Some(req.name.clone()),
            brand: Some(req.brand.clone()),
        }
    }
}

#[derive(Debug, Error)]
pub enum GetDeviceError {
    #[error("Device with id {id} not found")]
    NotFound { id: DeviceId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GetAllDevicesError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum CreateDeviceError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UpdateDeviceError {
    #[error("Device with id {id} not found")]
    NotFound { id: DeviceId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DeleteDeviceError {
    #[error("Device with id {id} not found")]
    NotFound { id: DeviceId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[cfg(test)]
mod device_name_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let result = DeviceName::new("Galaxy S24");
        let expected = Ok(DeviceName("Galaxy S24".to_string()));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_name_is_empty() {
        assert_eq!(DeviceName::new(""), Err(DeviceNameError::Empty));
    }

    #[test]
    fn test_blank_is_reported_before_length() {
        assert_eq!(DeviceName::new(" "), Err(DeviceNameError::Empty));
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(DeviceName::new("X"), Err(DeviceNameError::Length));
    }

    #[test]
    fn test_name_length_bounds_are_inclusive() {
        assert!(DeviceName::new("XY").is_ok());
        assert!(DeviceName::new(&"x".repeat(50)).is_ok());
        assert_eq!(
            DeviceName::new(&"x".repeat(51)),
            Err(DeviceNameError::Length)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(DeviceName::new(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DeviceNameError::Empty.to_string(), "Device name is required");
        assert_eq!(
            DeviceNameError::Length.to_string(),
            "Device name must be between 2 and 50 characters"
        );
    }
}

#[cfg(test)]
mod patch_device_request_tests {
    use super::*;

    #[test]
    fn test_from_update_request_sets_every_field() {
        let name = DeviceName::new("Pixel 9").unwrap();
        let brand = BrandName::new("Google").unwrap();
        let update = UpdateDeviceRequest::new(name.clone(), brand.clone());

        let patch = PatchDeviceRequest::from(&update);

        assert_eq!(patch.name(), Some(&name));
        assert_eq!(patch.brand(), Some(&brand));
    }
}
