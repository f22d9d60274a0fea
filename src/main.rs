// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_web::config::Config;
use kube_web::dispatch::Dispatcher;
use kube_web::kubernetes::{connect, ResourceRegistry};
use kube_web::web::serve;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting kube-web {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;

    // Create Kubernetes client
    let connection = connect().await?;
    let cluster_name = config.cluster_name.clone().unwrap_or(connection.name);
    info!("Connected to Kubernetes cluster {}", cluster_name);

    // Discovery has to succeed before anything is served
    let registry = ResourceRegistry::discover(&connection.client)
        .await
        .context("Resource discovery failed")?;

    let dispatcher = Arc::new(Dispatcher::new(
        connection.client,
        Arc::new(registry),
        cluster_name,
    ));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;

    serve(listener, dispatcher, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
