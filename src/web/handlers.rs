// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Request handlers turning extracted path segments into dispatcher calls

use crate::constants::{media, params};
use crate::dispatch::{Dispatcher, Outcome, Page, PageContext, ResourceRequest, TableExport};
use crate::error::{KubeWebError, Result};
use crate::export::{download_filename, export};
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;

type AppState = State<Arc<Dispatcher>>;

/// Query parameters shared by the resource pages
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    /// Label selector forwarded to list calls
    pub selector: Option<String>,
    /// `tsv` exports the first listed table
    pub download: Option<String>,
    /// `yaml` renders a single resource as YAML
    pub view: Option<String>,
}

impl ResourceQuery {
    fn into_request(
        self,
        cluster: String,
        namespace: Option<String>,
        plural: String,
        name: Option<String>,
        uri: &Uri,
    ) -> ResourceRequest {
        ResourceRequest {
            cluster,
            namespace,
            plural,
            name,
            selector: self.selector.filter(|v| !v.is_empty()),
            download: self.download.filter(|v| !v.is_empty()),
            view: self.view.filter(|v| !v.is_empty()),
            rel_url: rel_url(uri),
        }
    }
}

/// Handle GET / - send the browser to the cluster list
pub async fn index() -> Response {
    (StatusCode::FOUND, [(LOCATION, "/clusters")]).into_response()
}

/// Handle GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Handle GET /clusters
pub async fn list_clusters(State(dispatcher): AppState, uri: Uri) -> Result<Response> {
    respond(Outcome::Render(dispatcher.clusters(&rel_url(&uri))))
}

/// Handle GET /clusters/{cluster}
pub async fn get_cluster(
    State(dispatcher): AppState,
    Path(cluster): Path<String>,
    uri: Uri,
) -> Result<Response> {
    respond(dispatcher.cluster(&cluster, &rel_url(&uri)).await?)
}

/// Handle GET /clusters/{cluster}/namespaces
pub async fn list_namespaces(
    State(dispatcher): AppState,
    Path(cluster): Path<String>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, None, "namespaces".to_string(), None, &uri);
    respond(dispatcher.list(&request).await?)
}

/// Handle GET /clusters/{cluster}/namespaces/{name}, the cluster-scoped
/// view of a single namespace
pub async fn get_namespace(
    State(dispatcher): AppState,
    Path((cluster, name)): Path<(String, String)>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, None, "namespaces".to_string(), Some(name), &uri);
    respond(dispatcher.get(&request).await?)
}

/// Handle GET /clusters/{cluster}/{plural}
pub async fn list_cluster_resources(
    State(dispatcher): AppState,
    Path((cluster, plural)): Path<(String, String)>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, None, plural, None, &uri);
    respond(dispatcher.list(&request).await?)
}

/// Handle GET /clusters/{cluster}/{plural}/{name}
pub async fn get_cluster_resource(
    State(dispatcher): AppState,
    Path((cluster, plural, name)): Path<(String, String, String)>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, None, plural, Some(name), &uri);
    respond(dispatcher.get(&request).await?)
}

/// Handle GET /clusters/{cluster}/namespaces/{namespace}/{plural}
pub async fn list_namespaced_resources(
    State(dispatcher): AppState,
    Path((cluster, namespace, plural)): Path<(String, String, String)>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, Some(namespace), plural, None, &uri);
    respond(dispatcher.list(&request).await?)
}

/// Handle GET /clusters/{cluster}/namespaces/{namespace}/{plural}/{name}
pub async fn get_namespaced_resource(
    State(dispatcher): AppState,
    Path((cluster, namespace, plural, name)): Path<(String, String, String, String)>,
    Query(query): Query<ResourceQuery>,
    uri: Uri,
) -> Result<Response> {
    let request = query.into_request(cluster, Some(namespace), plural, Some(name), &uri);
    respond(dispatcher.get(&request).await?)
}

/// Fallback for every unknown path
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, [(CONTENT_TYPE, media::TEXT)], "Not found").into_response()
}

/// Path and query of the request as the browser sent it
fn rel_url(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string())
}

fn respond(outcome: Outcome) -> Result<Response> {
    match outcome {
        Outcome::Render(ctx) => render(&ctx),
        Outcome::Export(table) => Ok(tsv_download(table)),
    }
}

/// JSON for every page; a resource with `view=yaml` as plain YAML
fn render(ctx: &PageContext) -> Result<Response> {
    if let Page::ResourceView {
        resource,
        view: Some(view),
    } = &ctx.page
    {
        if view == params::VIEW_YAML {
            let yaml =
                serde_yaml::to_string(resource).map_err(|e| KubeWebError::Render(e.to_string()))?;
            return Ok(([(CONTENT_TYPE, media::YAML)], yaml).into_response());
        }
    }

    let json = serde_json::to_vec_pretty(ctx).map_err(|e| KubeWebError::Render(e.to_string()))?;
    Ok(([(CONTENT_TYPE, media::JSON)], json).into_response())
}

fn tsv_download(TableExport { table, path }: TableExport) -> Response {
    let body = Body::from_stream(export(table).map(Ok::<_, Infallible>));
    let mut response = ([(CONTENT_TYPE, media::TSV)], body).into_response();

    let disposition = format!("attachment; filename=\"{}\"", download_filename(&path));
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        response.headers_mut().insert(CONTENT_DISPOSITION, value);
    }
    response
}
