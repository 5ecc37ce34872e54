//! InMemoryProductStore - Vec-backed product store behind a single lock.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::product::{Product, ProductInput};

use super::{ProductStore, StoreError};

/// Records plus the next id to hand out. Guarded together so id assignment
/// and insertion happen under the same write lock.
struct Catalog {
    products: Vec<Product>,
    next_id: u64,
}

impl Catalog {
    fn position(&self, id: u64) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

/// In-memory product store.
///
/// Ids come from a monotonic counter rather than `max(id) + 1`, so an id is
/// never handed out twice even after the highest record is deleted.
/// Clone-friendly via Arc; clones share the same record set.
#[derive(Clone)]
pub struct InMemoryProductStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductStore {
    /// Create an empty store. The first product gets id 1.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog {
                products: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store preloaded with existing records.
    ///
    /// Records that break the id-uniqueness or range invariants are
    /// rejected. The counter continues after the highest preloaded id.
    pub fn with_products(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = Vec::with_capacity(products.len());
        for product in &products {
            if product.id == 0 || seen.contains(&product.id) {
                return Err(StoreError::InvalidArgument(format!(
                    "duplicate or zero id {}",
                    product.id
                )));
            }
            product.input().validate()?;
            seen.push(product.id);
        }

        let next_id = seen.iter().max().map(|max| max + 1).unwrap_or(1);
        Ok(Self {
            catalog: Arc::new(RwLock::new(Catalog { products, next_id })),
        })
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self) -> Result<Vec<Product>, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::lock_poisoned("list"))?;
        Ok(catalog.products.clone())
    }

    fn get(&self, id: u64) -> Result<Product, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::lock_poisoned("get"))?;
        catalog
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn create(&self, input: ProductInput) -> Result<Product, StoreError> {
        input.validate()?;

        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::lock_poisoned("create"))?;

        let id = catalog.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Internal("product id space exhausted".into()))?;

        let product = Product::from_input(id, input);
        catalog.products.push(product.clone());
        catalog.next_id = next_id;

        debug!(id, name = %product.name, "product created");
        Ok(product)
    }

    fn update(&self, id: u64, input: ProductInput) -> Result<Product, StoreError> {
        input.validate()?;

        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::lock_poisoned("update"))?;

        let index = catalog.position(id).ok_or(StoreError::NotFound { id })?;
        let product = &mut catalog.products[index];
        product.apply(input);

        debug!(id, "product updated");
        Ok(product.clone())
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut catalog = self
            .catalog
            .write()
            .map_err(|_| StoreError::lock_poisoned("delete"))?;

        let index = catalog.position(id).ok_or(StoreError::NotFound { id })?;
        catalog.products.remove(index);

        debug!(id, "product deleted");
        Ok(())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::lock_poisoned("count"))?;
        Ok(catalog.products.len())
    }
}

/// The two-book demo catalogue the store process can start with.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Engenharia de Software Moderna".into(),
            quantity: 10,
            price: 99.90,
            photo: "livro1.jpg".into(),
            author: "Marco Tulio Valente".into(),
        },
        Product {
            id: 2,
            name: "Clean Code".into(),
            quantity: 5,
            price: 89.90,
            photo: "livro2.jpg".into(),
            author: "Robert C. Martin".into(),
        },
    ]
}
