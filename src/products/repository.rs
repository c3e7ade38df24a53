// src/products/repository.rs
//
// Product storage behind a trait so the form workflow can be tested without
// a server and the in-memory store can be swapped for a real datastore.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::{seed_products, Product, ProductDraft};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Product id space exhausted")]
    IdExhausted,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> Vec<Product>;

    /// Id the next appended product will receive: max + 1, or 1 when empty
    async fn next_id(&self) -> u64;

    /// Assigns the next id and stores the product as one atomic step
    async fn append(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;

    async fn count(&self) -> usize {
        self.list().await.len()
    }
}

fn next_id_of(products: &[Product]) -> Result<u64, RepositoryError> {
    match products.iter().map(|p| p.id).max() {
        Some(max) => max.checked_add(1).ok_or(RepositoryError::IdExhausted),
        None => Ok(1),
    }
}

/// Append-only product list living for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn next_id(&self) -> u64 {
        // Only an exhausted id space fails, and append reports that itself
        next_id_of(&self.products.read().await).unwrap_or(u64::MAX)
    }

    async fn append(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let id = next_id_of(&products)?;
        let product = draft.into_product(id);
        products.push(product.clone());

        debug!(product_id = id, total = products.len(), "Product appended");

        Ok(product)
    }

    async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}
