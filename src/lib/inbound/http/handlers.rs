use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::brand::models::brand::{Brand, BrandName};
use crate::domain::device::models::device::{
    CreateDeviceRequest, Device, DeviceName, PatchDeviceRequest, UpdateDeviceRequest,
};
use crate::inbound::http::validation::FieldErrors;

pub mod create_brand;
pub mod create_device;
pub mod delete_brand;
pub mod delete_device;
pub mod get_brands;
pub mod get_devices;
pub mod update_brand;
pub mod update_device;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponseData {
    id: i64,
    #[schema(example = "Galaxy S24")]
    name: String,
    #[schema(example = "Samsung")]
    brand: String,
    #[schema(example = "2024-10-21T15:30:00.000Z")]
    creation_time: String,
}

impl From<&Device> for DeviceResponseData {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id().into_inner(),
            name: device.name().to_string(),
            brand: device.brand().name().to_string(),
            creation_time: device
                .creation_time()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn devices_response_data(devices: &[Device]) -> Vec<DeviceResponseData> {
    devices.iter().map(DeviceResponseData::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrandResponseData {
    id: i64,
    name: String,
}

impl From<&Brand> for BrandResponseData {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id().into_inner(),
            name: brand.name().to_string(),
        }
    }
}

/// Device as sent by clients. Every field is optional at the wire level so that a missing field
/// is reported as a validation error instead of a deserialization failure. `id` and
/// `creationTime` are read-only and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct DeviceHttpRequestBody {
    #[schema(example = "Galaxy S24", min_length = 2, max_length = 50)]
    name: Option<String>,
    #[schema(example = "Samsung")]
    brand: Option<String>,
}

impl DeviceHttpRequestBody {
    fn parse(
        errors: &mut FieldErrors,
        name: Option<&str>,
        brand: Option<&str>,
    ) -> (Option<DeviceName>, Option<BrandName>) {
        let name = name.and_then(|n| errors.check("name", DeviceName::new(n)));
        let brand = brand.and_then(|b| errors.check("brand", BrandName::new(b)));

        (name, brand)
    }

    /// Both fields are required; a missing field is validated as if it were empty.
    fn try_into_parts(self) -> Result<(DeviceName, BrandName), FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = Some(self.name.as_deref().unwrap_or_default());
        let brand = Some(self.brand.as_deref().unwrap_or_default());

        match Self::parse(&mut errors, name, brand) {
            (Some(name), Some(brand)) if errors.is_empty() => Ok((name, brand)),
            _ => Err(errors),
        }
    }

    fn try_into_create(self) -> Result<CreateDeviceRequest, FieldErrors> {
        self.try_into_parts()
            .map(|(name, brand)| CreateDeviceRequest::new(name, brand))
    }

    fn try_into_update(self) -> Result<UpdateDeviceRequest, FieldErrors> {
        self.try_into_parts()
            .map(|(name, brand)| UpdateDeviceRequest::new(name, brand))
    }

    /// Absent fields are left out of the patch; present ones must still be valid.
    fn try_into_patch(self) -> Result<PatchDeviceRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        let (name, brand) = Self::parse(&mut errors, self.name.as_deref(), self.brand.as_deref());

        if errors.is_empty() {
            Ok(PatchDeviceRequest::new(name, brand))
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BrandHttpRequestBody {
    #[schema(example = "Samsung")]
    name: Option<String>,
}

impl BrandHttpRequestBody {
    fn try_into_name(self) -> Result<BrandName, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.check(
            "name",
            BrandName::new(self.name.as_deref().unwrap_or_default()),
        );

        name.ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::brand::models::brand::BrandId;
    use crate::domain::device::models::device::DeviceId;

    fn body(name: Option<&str>, brand: Option<&str>) -> DeviceHttpRequestBody {
        DeviceHttpRequestBody {
            name: name.map(str::to_string),
            brand: brand.map(str::to_string),
        }
    }

    #[test]
    fn test_device_response_data() {
        let brand = Brand::new(BrandId::new(3), BrandName::new("Samsung").unwrap());
        let device = Device::new(
            DeviceId::new(8),
            DeviceName::new("Galaxy").unwrap(),
            brand,
            Utc.with_ymd_and_hms(2023, 10, 21, 15, 30, 0).unwrap(),
        );

        let data = DeviceResponseData::from(&device);
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 8,
                "name": "Galaxy",
                "brand": "Samsung",
                "creationTime": "2023-10-21T15:30:00.000Z",
            })
        );
    }

    #[test]
    fn test_create_requires_both_fields() {
        let errors = body(None, None).try_into_create().unwrap_err().into_inner();

        assert_eq!(errors.get("name").unwrap(), "Device name is required");
        assert_eq!(errors.get("brand").unwrap(), "Brand is required");
    }

    #[test]
    fn test_create_reports_length() {
        let errors = body(Some("X"), Some("Acme"))
            .try_into_create()
            .unwrap_err()
            .into_inner();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("name").unwrap(),
            "Device name must be between 2 and 50 characters"
        );
    }

    #[test]
    fn test_update_success() {
        let req = body(Some("Pixel"), Some("Google")).try_into_update().unwrap();

        assert_eq!(req.name().as_str(), "Pixel");
        assert_eq!(req.brand().as_str(), "Google");
    }

    #[test]
    fn test_patch_allows_absent_fields() {
        let req = body(None, Some("Google")).try_into_patch().unwrap();

        assert_eq!(req.name(), None);
        assert_eq!(req.brand().unwrap().as_str(), "Google");
    }

    #[test]
    fn test_patch_rejects_invalid_present_field() {
        let errors = body(Some(""), None).try_into_patch().unwrap_err().into_inner();

        assert_eq!(errors.get("name").unwrap(), "Device name is required");
        assert!(!errors.contains_key("brand"));
    }

    #[test]
    fn test_brand_body() {
        let ok = BrandHttpRequestBody {
            name: Some("Apple".to_string()),
        };
        let blank = BrandHttpRequestBody {
            name: Some("  ".to_string()),
        };

        assert_eq!(ok.try_into_name().unwrap().as_str(), "Apple");
        assert_eq!(
            blank.try_into_name().unwrap_err().into_inner().get("name").unwrap(),
            "Brand is required"
        );
    }
}
