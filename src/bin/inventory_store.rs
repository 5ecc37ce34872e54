//! `inventory-store` — serves the product record set over gRPC.

use std::sync::Arc;

use inventory::config::Config;
use inventory::{demo_catalog, rpc, telemetry, InMemoryProductStore, ProductStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    telemetry::init("inventory-store", &config.telemetry);

    let store = if config.store.seed_catalog {
        InMemoryProductStore::with_products(demo_catalog())?
    } else {
        InMemoryProductStore::new()
    };

    info!(
        addr = %config.store.listen_addr,
        products = store.count()?,
        "inventory store listening"
    );

    rpc::serve_grpc_with_shutdown(
        Arc::new(store),
        config.store.listen_addr,
        telemetry::shutdown_signal(),
    )
    .await?;

    info!("inventory store stopped");
    Ok(())
}
