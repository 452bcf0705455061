//! Product and supplier list endpoints

use async_trait::async_trait;
use shared::{Product, Supplier};

use super::ApiClient;
use crate::error::ClientResult;

/// Reference data the offer screen selects from
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    async fn list_suppliers(&self) -> ClientResult<Vec<Supplier>>;
}

#[async_trait]
impl CatalogBackend for ApiClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get_json(&self.products_path).await
    }

    async fn list_suppliers(&self) -> ClientResult<Vec<Supplier>> {
        self.get_json(&self.suppliers_path).await
    }
}
