use derive_more::{Display, From};
use thiserror::Error;

/// Server-assigned brand identifier.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct BrandId(i64);

impl BrandId {
    pub fn new(raw_id: i64) -> Self {
        Self(raw_id)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// Represents always valid brand name.
#[derive(Display, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrandName(String);

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Brand is required")]
pub struct BrandNameEmptyError;
impl BrandName {
    pub fn new(raw_name: &str) -> Result<Self, BrandNameEmptyError> {
        if raw_name.trim().is_empty() {
            Err(BrandNameEmptyError)
        } else {
            Ok(Self(raw_name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Brand {
    id: BrandId,
    name: BrandName,
}

impl Brand {
    pub fn new(id: BrandId, name: BrandName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &BrandId {
        &self.id
    }

    pub fn name(&self) -> &BrandName {
        &self.name
    }
}

/// Data required by the domain to create a [Brand].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct CreateBrandRequest {
    name: BrandName,
}

impl CreateBrandRequest {
    pub fn new(name: BrandName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &BrandName {
        &self.name
    }
}

/// Data required by the domain to rename an existing [Brand].
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub struct UpdateBrandRequest {
    name: BrandName,
}

impl UpdateBrandRequest {
    pub fn new(name: BrandName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &BrandName {
        &self.name
    }
}

#[derive(Debug, Error)]
pub enum GetBrandError {
    #[error("Brand with id {id} not found")]
    NotFound { id: BrandId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum GetAllBrandsError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum CreateBrandError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UpdateBrandError {
    #[error("Brand with id {id} not found")]
    NotFound { id: BrandId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum DeleteBrandError {
    #[error("Brand with id {id} not found")]
    NotFound { id: BrandId },
    #[error("Brand with id {id} is still referenced by devices")]
    InUse { id: BrandId },
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}
