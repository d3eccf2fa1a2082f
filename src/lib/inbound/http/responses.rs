use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::brand::models::brand::{
    CreateBrandError, DeleteBrandError, GetAllBrandsError, GetBrandError, UpdateBrandError,
};
use crate::domain::device::models::device::{
    CreateDeviceError, DeleteDeviceError, GetAllDevicesError, GetDeviceError, UpdateDeviceError,
};
use crate::inbound::http::validation::FieldErrors;

/// Envelope wrapping every successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    message: String,
    success: bool,
    /// Number of matching elements, present on list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    total_elements: Option<u64>,
}

/// Envelope wrapping every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponseBody {
    /// Field name to violation message, only present on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<BTreeMap<String, String>>,
    #[schema(example = 404)]
    code: u16,
    message: String,
    success: bool,
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1.0 == other.1.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(
            status,
            Json(ResponseBody {
                data: Some(data),
                message: message.into(),
                success: true,
                total_elements: None,
            }),
        )
    }

    pub fn with_total(
        status: StatusCode,
        message: impl Into<String>,
        data: T,
        total_elements: u64,
    ) -> Self {
        let mut success = Self::new(status, message, data);
        success.1.0.total_elements = Some(total_elements);
        success
    }
}

impl ApiSuccess<()> {
    /// Success without a payload, e.g. after a deletion.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(
            status,
            Json(ResponseBody {
                data: None,
                message: message.into(),
                success: true,
                total_elements: None,
            }),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Every failure the HTTP layer can report. This is the only place where error status codes are
/// decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    ValidationFailed(BTreeMap<String, String>),
    InternalServerError(String),
}

impl ApiError {
    pub const VALIDATION_FAILED_MESSAGE: &'static str = "Validation failed";

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn unknown(cause: anyhow::Error) -> Self {
        tracing::error!("{:?}", cause);
        Self::InternalServerError(cause.to_string())
    }

    fn invalid_input(field: &str, message: String) -> Self {
        let mut errors = FieldErrors::default();
        errors.add(field, message);
        errors.into()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::unknown(e)
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::ValidationFailed(errors.into_inner())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input("body", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_input("path", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_input("query", rejection.body_text())
    }
}

impl From<GetBrandError> for ApiError {
    fn from(e: GetBrandError) -> Self {
        match e {
            GetBrandError::NotFound { .. } => Self::NotFound(e.to_string()),
            GetBrandError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<GetAllBrandsError> for ApiError {
    fn from(e: GetAllBrandsError) -> Self {
        match e {
            GetAllBrandsError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<CreateBrandError> for ApiError {
    fn from(e: CreateBrandError) -> Self {
        match e {
            CreateBrandError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<UpdateBrandError> for ApiError {
    fn from(e: UpdateBrandError) -> Self {
        match e {
            UpdateBrandError::NotFound { .. } => Self::NotFound(e.to_string()),
            UpdateBrandError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<DeleteBrandError> for ApiError {
    fn from(e: DeleteBrandError) -> Self {
        match e {
            DeleteBrandError::NotFound { .. } => Self::NotFound(e.to_string()),
            DeleteBrandError::InUse { .. } => {
                tracing::error!("{}", e);
                Self::InternalServerError(e.to_string())
            }
            DeleteBrandError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<GetDeviceError> for ApiError {
    fn from(e: GetDeviceError) -> Self {
        match e {
            GetDeviceError::NotFound { .. } => Self::NotFound(e.to_string()),
            GetDeviceError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<GetAllDevicesError> for ApiError {
    fn from(e: GetAllDevicesError) -> Self {
        match e {
            GetAllDevicesError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<CreateDeviceError> for ApiError {
    fn from(e: CreateDeviceError) -> Self {
        match e {
            CreateDeviceError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<UpdateDeviceError> for ApiError {
    fn from(e: UpdateDeviceError) -> Self {
        match e {
            UpdateDeviceError::NotFound { .. } => Self::NotFound(e.to_string()),
            UpdateDeviceError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl From<DeleteDeviceError> for ApiError {
    fn from(e: DeleteDeviceError) -> Self {
        match e {
            DeleteDeviceError::NotFound { .. } => Self::NotFound(e.to_string()),
            DeleteDeviceError::Unknown(cause) => Self::unknown(cause),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        let status = self.status_code();
        let (message, data) = match self {
            NotFound(message) => {
                tracing::warn!("{}", message);
                (message, None)
            }
            ValidationFailed(errors) => {
                tracing::warn!(?errors, "validation failed");
                (Self::VALIDATION_FAILED_MESSAGE.to_string(), Some(errors))
            }
            // Logged with its full cause chain where it was created.
            InternalServerError(message) => (message, None),
        };

        let body = ErrorResponseBody {
            data,
            code: status.as_u16(),
            message,
            success: false,
        };

        (status, Json(body)).into_response()
    }
}
