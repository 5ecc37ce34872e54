//! StoreClient — the gateway's typed view of the store's gRPC interface.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use crate::product::{Product, ProductInput};
use crate::rpc::{Empty, InventoryServiceClient, PingReply, ProductId, ProductRequest};

use super::error::GatewayError;

/// Thin wrapper over the generated client: domain types in, domain types
/// out, every `tonic::Status` converted to a [`GatewayError`].
///
/// Cheap to clone; clones share the underlying channel.
#[derive(Clone)]
pub struct StoreClient {
    inner: InventoryServiceClient<Channel>,
}

impl StoreClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: InventoryServiceClient::new(channel),
        }
    }

    /// Build a client whose channel connects on first use.
    ///
    /// The gateway starts even while the store is down; calls made before it
    /// comes up fail with `TransportUnavailable`. Must be called from within a
    /// tokio runtime.
    pub fn connect_lazy(
        endpoint: &str,
        connect_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(endpoint.to_string())?
            .connect_timeout(connect_timeout)
            .connect_lazy();
        Ok(Self::new(channel))
    }

    pub async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let reply = self
            .inner
            .clone()
            .search_all_products(Empty {})
            .await?
            .into_inner();
        Ok(reply.products.into_iter().map(Product::from).collect())
    }

    pub async fn get(&self, id: u64) -> Result<Product, GatewayError> {
        let reply = self
            .inner
            .clone()
            .search_product_by_id(ProductId { id })
            .await?
            .into_inner();
        Ok(reply.into())
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product, GatewayError> {
        let reply = self
            .inner
            .clone()
            .add_product(ProductRequest::new(0, input))
            .await?
            .into_inner();
        Ok(reply.into())
    }

    pub async fn update(&self, id: u64, input: ProductInput) -> Result<Product, GatewayError> {
        let reply = self
            .inner
            .clone()
            .update_product(ProductRequest::new(id, input))
            .await?
            .into_inner();
        Ok(reply.into())
    }

    pub async fn delete(&self, id: u64) -> Result<(), GatewayError> {
        self.inner.clone().delete_product(ProductId { id }).await?;
        Ok(())
    }

    /// Liveness check against the dedicated `Ping` RPC.
    pub async fn ping(&self) -> Result<PingReply, GatewayError> {
        Ok(self.inner.clone().ping(Empty {}).await?.into_inner())
    }
}
