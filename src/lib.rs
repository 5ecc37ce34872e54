mod product;
mod store;

pub use product::{Product, ProductInput};
pub use store::{demo_catalog, InMemoryProductStore, ProductStore, StoreError};

// gRPC transport, configuration and tracing (requires "grpc" feature)
#[cfg(feature = "grpc")]
pub mod config;
#[cfg(feature = "grpc")]
pub mod rpc;
#[cfg(feature = "grpc")]
pub mod telemetry;

// HTTP gateway (requires "http" feature)
#[cfg(feature = "http")]
pub mod gateway;
