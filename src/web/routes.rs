// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! URL layout of the browser

use crate::dispatch::Dispatcher;
use crate::web::handlers::{
    get_cluster, get_cluster_resource, get_namespace, get_namespaced_resource, health_check,
    index, list_cluster_resources, list_clusters, list_namespaced_resources, list_namespaces,
    not_found,
};
use axum::routing::{get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Create the browser router.
///
/// `namespaces` gets explicit routes: `/clusters/{cluster}/namespaces/{name}`
/// is the cluster-scoped view of one namespace, not a namespaced listing.
pub fn create_router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/clusters", get(list_clusters))
        .route("/clusters/{cluster}", get(get_cluster))
        .route("/clusters/{cluster}/namespaces", get(list_namespaces))
        .route("/clusters/{cluster}/namespaces/{namespace}", get(get_namespace))
        .route(
            "/clusters/{cluster}/namespaces/{namespace}/{plural}",
            get(list_namespaced_resources),
        )
        .route(
            "/clusters/{cluster}/namespaces/{namespace}/{plural}/{name}",
            get(get_namespaced_resource),
        )
        .route("/clusters/{cluster}/{plural}", get(list_cluster_resources))
        .route("/clusters/{cluster}/{plural}/{name}", get(get_cluster_resource))
        .fallback(not_found)
        .with_state(dispatcher)
        .layer(TraceLayer::new_for_http())
}
