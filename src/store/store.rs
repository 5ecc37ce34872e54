//! ProductStore - the operations that read and mutate the record set.

use crate::product::{Product, ProductInput};

use super::StoreError;

/// Abstract product storage.
///
/// Implementations must make each mutation atomic with respect to every
/// other operation: id assignment on `create` and the find-then-write of
/// `update`/`delete` cannot interleave.
pub trait ProductStore: Send + Sync {
    /// All products in insertion order.
    fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// The product with this id.
    fn get(&self, id: u64) -> Result<Product, StoreError>;

    /// Validate and insert a new product, assigning its id.
    fn create(&self, input: ProductInput) -> Result<Product, StoreError>;

    /// Validate, then replace the fields of an existing product.
    ///
    /// Validation runs before the existence check, so an invalid input for a
    /// missing id is `InvalidArgument`, not `NotFound`.
    fn update(&self, id: u64, input: ProductInput) -> Result<Product, StoreError>;

    /// Remove the product with this id.
    fn delete(&self, id: u64) -> Result<(), StoreError>;

    /// Number of stored products. Used as the liveness probe.
    fn count(&self) -> Result<usize, StoreError>;
}
