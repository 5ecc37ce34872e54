//! gRPC transport for the store — exposes a `ProductStore` as
//! `inventory.InventoryService`.
//!
//! Requires the `grpc` feature. Uses tonic for the server and client and
//! prost for message serialization (standard protobuf wire format, no
//! `.proto` file; the service is generated by `build.rs`).
//!
//! ## RPCs
//!
//! - `SearchAllProducts` — `Empty` → `ProductList`
//! - `SearchProductById` — `ProductId` → `ProductReply`
//! - `AddProduct` — `ProductRequest` → `ProductReply`
//! - `UpdateProduct` — `ProductRequest` → `ProductReply`
//! - `DeleteProduct` — `ProductId` → `Empty`
//! - `Ping` — `Empty` → `PingReply` (liveness only, never a domain error)
//!
//! Domain failures travel as `tonic::Status` with `NOT_FOUND`,
//! `INVALID_ARGUMENT` or `INTERNAL`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use inventory::{rpc, InMemoryProductStore};
//!
//! let store = Arc::new(InMemoryProductStore::new());
//!
//! // Get the server to compose with other tonic services
//! let grpc_svc = rpc::grpc_server(store.clone());
//!
//! // Or serve directly
//! rpc::serve_grpc(store, "[::1]:50051".parse()?).await?;
//! ```

mod handler;
mod messages;

pub use handler::{grpc_server, serve_grpc, serve_grpc_with_shutdown, status_from, InventoryHandler};
pub use messages::{Empty, PingReply, ProductId, ProductList, ProductReply, ProductRequest};

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/inventory.InventoryService.rs"));

pub use inventory_service_client::InventoryServiceClient;
pub use inventory_service_server::{InventoryService, InventoryServiceServer};
