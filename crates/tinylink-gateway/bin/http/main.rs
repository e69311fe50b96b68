mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tinylink_core::{Registry, Store};
use tinylink_gateway::{App, AppState};
use tinylink_generator::{HashGenerator, HashSettings};
use tinylink_registry::{RegistryService, RegistrySettings};
use tinylink_storage::{InMemoryStore, RedisStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    tinylink_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        namespace = %config.namespace,
        max_salted_attempts = config.max_salted_attempts,
        "starting tinylink gateway"
    );

    let registry = match config.storage {
        StorageBackendArg::InMemory => build_registry(InMemoryStore::new(), &config),
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis url is required when storage backend is redis")?;
            let store = RedisStore::connect(redis_url)
                .await
                .context("failed to connect to redis")?;
            build_registry(store, &config)
        }
    };

    let mut state = AppState::new(registry, config.api_key.clone());
    if let Some(base_url) = &config.public_base_url {
        state = state.with_public_base_url(base_url.clone());
    }

    serve(config.listen_addr, state).await
}

fn build_registry<S: Store>(store: S, config: &CLI) -> Arc<dyn Registry> {
    let generator = HashGenerator::new(HashSettings::builder().seed(config.hash_seed).build());
    let settings = RegistrySettings::builder()
        .namespace(config.namespace.as_str())
        .max_salted_attempts(config.max_salted_attempts)
        .build();
    Arc::new(RegistryService::new(store, generator, settings))
}

async fn serve(listen_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
    }
}
