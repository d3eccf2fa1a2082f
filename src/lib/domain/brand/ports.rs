use std::future::Future;

use crate::domain::brand::models::brand::{
    Brand, BrandId, BrandName, CreateBrandError, CreateBrandRequest, DeleteBrandError,
    GetAllBrandsError, GetBrandError, UpdateBrandError, UpdateBrandRequest,
};

/// `BrandService` is the public API for the brand domain.
pub trait BrandService: Clone + Send + Sync + 'static {
    fn find_brand_by_id(&self, id: &BrandId)
    -> impl Future<Output = Result<Brand, GetBrandError>> + Send;

    fn find_all_brands(&self) -> impl Future<Output = Result<Vec<Brand>, GetAllBrandsError>> + Send;

    fn add_brand(
        &self,
        req: &CreateBrandRequest,
    ) -> impl Future<Output = Result<Brand, CreateBrandError>> + Send;

    /// Returns the brand called `name`, creating it first when it does not exist.
    fn get_or_create_brand(
        &self,
        name: &BrandName,
    ) -> impl Future<Output = Result<Brand, CreateBrandError>> + Send;

    fn update_brand(
        &self,
        id: &BrandId,
        req: &UpdateBrandRequest,
    ) -> impl Future<Output = Result<Brand, UpdateBrandError>> + Send;

    fn delete_brand(&self, id: &BrandId) -> impl Future<Output = Result<(), DeleteBrandError>> + Send;
}

/// `BrandRepository` represents a store of brand data.
pub trait BrandRepository: Send + Sync + Clone + 'static {
    fn find_brand_by_id(&self, id: &BrandId)
    -> impl Future<Output = Result<Brand, GetBrandError>> + Send;

    fn find_all_brands(&self) -> impl Future<Output = Result<Vec<Brand>, GetAllBrandsError>> + Send;

    fn create_brand(
        &self,
        req: &CreateBrandRequest,
    ) -> impl Future<Output = Result<Brand, CreateBrandError>> + Send;

    /// Looks the brand up by exact name and inserts it on a miss, atomically.
    fn get_or_create_brand(
        &self,
        name: &BrandName,
    ) -> impl Future<Output = Result<Brand, CreateBrandError>> + Send;

    fn update_brand(
        &self,
        id: &BrandId,
        req: &UpdateBrandRequest,
    ) -> impl Future<Output = Result<Brand, UpdateBrandError>> + Send;

    fn delete_brand(&self, id: &BrandId) -> impl Future<Output = Result<(), DeleteBrandError>> + Send;
}
