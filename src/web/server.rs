// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use crate::dispatch::Dispatcher;
use crate::web::routes::create_router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the browser until `shutdown` resolves
pub async fn serve<F>(
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(dispatcher))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Shut down");
    Ok(())
}
