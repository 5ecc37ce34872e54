//! `inventory-gateway` — HTTP/JSON front end for the inventory store.

use inventory::config::Config;
use inventory::gateway::{self, StoreClient};
use inventory::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    telemetry::init("inventory-gateway", &config.telemetry);

    let client = StoreClient::connect_lazy(
        &config.gateway.store_endpoint,
        config.gateway.connect_timeout(),
    )?;

    info!(
        addr = %config.gateway.listen_addr,
        store = %config.gateway.store_endpoint,
        "inventory gateway listening"
    );

    gateway::serve_with_shutdown(client, config.gateway.listen_addr, telemetry::shutdown_signal())
        .await?;

    info!("inventory gateway stopped");
    Ok(())
}
