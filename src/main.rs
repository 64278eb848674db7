//! GrubDash service binary
//!
//! Loads configuration, seeds the in-memory stores and serves the REST API
//! until SIGTERM or Ctrl+C.

use anyhow::{Context, Result};
use grubdash::config::ServiceConfig;
use grubdash::core::UuidIdGenerator;
use grubdash::entities::EntityStores;
use grubdash::server::ServerBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stores = EntityStores::from_seed(&config.seed).context("invalid seed data")?;
    tracing::info!(
        dishes = stores.dishes.len()?,
        orders = stores.orders.len()?,
        "Stores seeded"
    );

    ServerBuilder::new()
        .register_entities(stores.descriptors(Arc::new(UuidIdGenerator)))?
        .serve(&config.bind_address())
        .await
}
