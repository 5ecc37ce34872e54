use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{error, warn};

use crate::store::{ProductStore, StoreError};

use super::{
    Empty, InventoryService, InventoryServiceServer, PingReply, ProductId, ProductList,
    ProductReply, ProductRequest,
};

// ---------------------------------------------------------------------------
// Handler implementation
// ---------------------------------------------------------------------------

/// gRPC handler that wraps a `ProductStore` and implements the generated
/// `InventoryService` trait.
pub struct InventoryHandler<S> {
    store: Arc<S>,
}

impl<S> InventoryHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl<S: ProductStore + 'static> InventoryService for InventoryHandler<S> {
    async fn search_all_products(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ProductList>, Status> {
        let products = self.store.list().map_err(|e| status_from("SearchAllProducts", e))?;
        Ok(Response::new(ProductList {
            products: products.into_iter().map(ProductReply::from).collect(),
        }))
    }

    async fn search_product_by_id(
        &self,
        request: Request<ProductId>,
    ) -> Result<Response<ProductReply>, Status> {
        let id = request.into_inner().id;
        let product = self
            .store
            .get(id)
            .map_err(|e| status_from("SearchProductById", e))?;
        Ok(Response::new(product.into()))
    }

    async fn add_product(
        &self,
        request: Request<ProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let input = request.into_inner().into_input();
        let product = self
            .store
            .create(input)
            .map_err(|e| status_from("AddProduct", e))?;
        Ok(Response::new(product.into()))
    }

    async fn update_product(
        &self,
        request: Request<ProductRequest>,
    ) -> Result<Response<ProductReply>, Status> {
        let req = request.into_inner();
        let id = req.id;
        let product = self
            .store
            .update(id, req.into_input())
            .map_err(|e| status_from("UpdateProduct", e))?;
        Ok(Response::new(product.into()))
    }

    async fn delete_product(
        &self,
        request: Request<ProductId>,
    ) -> Result<Response<Empty>, Status> {
        let id = request.into_inner().id;
        self.store
            .delete(id)
            .map_err(|e| status_from("DeleteProduct", e))?;
        Ok(Response::new(Empty {}))
    }

    async fn ping(&self, _request: Request<Empty>) -> Result<Response<PingReply>, Status> {
        // Liveness only: a store that cannot count its records still answers.
        let products = match self.store.count() {
            Ok(count) => count as u64,
            Err(e) => {
                warn!(rpc = "Ping", error = %e, "record count unavailable");
                0
            }
        };
        Ok(Response::new(PingReply { ok: true, products }))
    }
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Map a store failure to the gRPC status returned to the caller.
///
/// Domain failures are logged at `warn`, internal faults at `error`.
pub fn status_from(rpc: &str, err: StoreError) -> Status {
    match err {
        StoreError::NotFound { .. } => {
            warn!(rpc, error = %err, "store rejected request");
            Status::not_found(err.to_string())
        }
        StoreError::InvalidArgument(_) => {
            warn!(rpc, error = %err, "store rejected request");
            Status::invalid_argument(err.to_string())
        }
        StoreError::Internal(_) => {
            error!(rpc, error = %err, "store failed");
            Status::internal(err.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create an `InventoryServiceServer` from a shared store.
pub fn grpc_server<S: ProductStore + 'static>(
    store: Arc<S>,
) -> InventoryServiceServer<InventoryHandler<S>> {
    InventoryServiceServer::new(InventoryHandler::new(store))
}

/// Bind and serve the gRPC transport at the given address.
pub async fn serve_grpc<S: ProductStore + 'static>(
    store: Arc<S>,
    addr: SocketAddr,
) -> Result<(), tonic::transport::Error> {
    tonic::transport::Server::builder()
        .add_service(grpc_server(store))
        .serve(addr)
        .await
}

/// Like [`serve_grpc`], stopping gracefully once `shutdown` resolves.
pub async fn serve_grpc_with_shutdown<S, F>(
    store: Arc<S>,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    S: ProductStore + 'static,
    F: Future<Output = ()>,
{
    tonic::transport::Server::builder()
        .add_service(grpc_server(store))
        .serve_with_shutdown(addr, shutdown)
        .await
}
