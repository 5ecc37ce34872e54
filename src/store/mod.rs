//! Store — the authoritative product record set.
//!
//! `ProductStore` is the only way to read or mutate products. The gRPC
//! transport wraps any implementation; `InMemoryProductStore` is the one the
//! store process runs.
//!
//! ## Example
//!
//! ```ignore
//! use inventory::{InMemoryProductStore, ProductInput, ProductStore};
//!
//! let store = InMemoryProductStore::new();
//! let book = store.create(ProductInput::new("Book A", 3, 10.0))?;
//! assert_eq!(book.id, 1);
//! assert_eq!(store.get(1)?, book);
//! ```

mod error;
mod in_memory;
mod store;

pub use error::StoreError;
pub use in_memory::{demo_catalog, InMemoryProductStore};
pub use store::ProductStore;
