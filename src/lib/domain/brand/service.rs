use crate::domain::brand::models::brand::{
    Brand, BrandId, BrandName, CreateBrandError, CreateBrandRequest, DeleteBrandError,
    GetAllBrandsError, GetBrandError, UpdateBrandError, UpdateBrandRequest,
};
use crate::domain::brand::ports::{BrandRepository, BrandService};

/// Canonical implementation of the [BrandService] port, through which the brand domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<R: BrandRepository> {
    repo: R,
}

impl<R: BrandRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: BrandRepository> BrandService for Service<R> {
    async fn find_brand_by_id(&self, id: &BrandId) -> Result<Brand, GetBrandError> {
        tracing::info!(%id, "finding brand");
        let result = self.repo.find_brand_by_id(id).await;
        if let Err(GetBrandError::NotFound { .. }) = &result {
            tracing::warn!(%id, "brand not found");
        }

        result
    }

    async fn find_all_brands(&self) -> Result<Vec<Brand>, GetAllBrandsError> {
        let brands = self.repo.find_all_brands().await?;
        tracing::info!(count = brands.len(), "retrieved brands");

        Ok(brands)
    }

    async fn add_brand(&self, req: &CreateBrandRequest) -> Result<Brand, CreateBrandError> {
        let brand = self.repo.create_brand(req).await?;
        tracing::info!(id = %brand.id(), name = %brand.name(), "brand added");

        Ok(brand)
    }

    async fn get_or_create_brand(&self, name: &BrandName) -> Result<Brand, CreateBrandError> {
        tracing::info!(%name, "getting or creating brand");
        self.repo.get_or_create_brand(name).await
    }

    async fn update_brand(
        &self,
        id: &BrandId,
        req: &UpdateBrandRequest,
    ) -> Result<Brand, UpdateBrandError> {
        tracing::info!(%id, "updating brand");
        let brand = self.repo.update_brand(id, req).await?;
        tracing::info!(%id, name = %brand.name(), "brand updated");

        Ok(brand)
    }

    async fn delete_brand(&self, id: &BrandId) -> Result<(), DeleteBrandError> {
        tracing::info!(%id, "deleting brand");
        self.repo.delete_brand(id).await?;
        tracing::info!(%id, "brand deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::sqlite::Sqlite;

    async fn service() -> Service<Sqlite> {
        Service::new(Sqlite::in_memory().await.unwrap())
    }

    fn name(raw: &str) -> BrandName {
        BrandName::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_find() {
        let service = service().await;

        let added = service
            .add_brand(&CreateBrandRequest::new(name("Apple")))
            .await
            .unwrap();
        let found = service.find_brand_by_id(added.id()).await.unwrap();

        assert_eq!(found, added);
        assert_eq!(found.name().as_str(), "Apple");
    }

    #[tokio::test]
    async fn test_find_missing() {
        let service = service().await;

        let result = service.find_brand_by_id(&BrandId::new(42)).await;

        assert!(matches!(result, Err(GetBrandError::NotFound { id }) if id == BrandId::new(42)));
    }

    #[tokio::test]
    async fn test_add_allows_duplicate_names() {
        let service = service().await;

        let first = service
            .add_brand(&CreateBrandRequest::new(name("Nokia")))
            .await
            .unwrap();
        let second = service
            .add_brand(&CreateBrandRequest::new(name("Nokia")))
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(service.find_all_brands().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let service = service().await;

        let first = service.get_or_create_brand(&name("Sony")).await.unwrap();
        let second = service.get_or_create_brand(&name("Sony")).await.unwrap();

        assert_eq!(first.id(), second.id());
        let sony: Vec<_> = service
            .find_all_brands()
            .await
            .unwrap()
            .into_iter()
            .filter(|b| b.name().as_str() == "Sony")
            .collect();
        assert_eq!(sony.len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_returns_existing() {
        let service = service().await;
        let existing = service
            .add_brand(&CreateBrandRequest::new(name("LG")))
            .await
            .unwrap();

        let brand = service.get_or_create_brand(&name("LG")).await.unwrap();

        assert_eq!(brand, existing);
    }

    #[tokio::test]
    async fn test_update() {
        let service = service().await;
        let brand = service
            .add_brand(&CreateBrandRequest::new(name("Motorolla")))
            .await
            .unwrap();

        let updated = service
            .update_brand(brand.id(), &UpdateBrandRequest::new(name("Motorola")))
            .await
            .unwrap();

        assert_eq!(updated.id(), brand.id());
        assert_eq!(updated.name().as_str(), "Motorola");
        assert_eq!(service.find_brand_by_id(brand.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let service = service().await;

        let result = service
            .update_brand(&BrandId::new(9), &UpdateBrandRequest::new(name("HTC")))
            .await;

        assert!(matches!(result, Err(UpdateBrandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service().await;
        let brand = service
            .add_brand(&CreateBrandRequest::new(name("Siemens")))
            .await
            .unwrap();

        service.delete_brand(brand.id()).await.unwrap();

        assert!(matches!(
            service.find_brand_by_id(brand.id()).await,
            Err(GetBrandError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let service = service().await;

        let result = service.delete_brand(&BrandId::new(1)).await;

        assert!(matches!(result, Err(DeleteBrandError::NotFound { .. })));
    }
}
