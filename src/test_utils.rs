// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API server responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock API server that answers GET requests by exact path and records
/// every request URI it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Every request URI (path and query) seen so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        self.requests.lock().unwrap().push(req.uri().to_string());

        let response = if req.method() == http::Method::GET {
            self.responses.lock().unwrap().get(req.uri().path()).cloned()
        } else {
            None
        };

        Box::pin(async move {
            // Unknown paths behave like a kind the API server does not serve
            let (status, body) = response.unwrap_or_else(|| (404, unserved_kind_json()));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a discovery resource entry
pub fn api_resource_json(
    name: &str,
    kind: &str,
    namespaced: bool,
    verbs: &[&str],
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "singularName": "",
        "kind": kind,
        "namespaced": namespaced,
        "verbs": verbs,
    })
}

/// Create an `APIResourceList` response for one group version
pub fn resource_list_json(group_version: &str, resources: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": resources,
    })
    .to_string()
}

/// Create an `APIGroup` entry; `versions[0]` is used as the preferred version
/// when `preferred` is `None`
pub fn api_group_json(
    name: &str,
    versions: &[&str],
    preferred: Option<&str>,
) -> serde_json::Value {
    let versions: Vec<serde_json::Value> = versions
        .iter()
        .map(|v| {
            serde_json::json!({
                "groupVersion": format!("{}/{}", name, v),
                "version": v,
            })
        })
        .collect();
    let mut group = serde_json::json!({
        "name": name,
        "versions": versions,
    });
    if let Some(preferred) = preferred {
        group["preferredVersion"] = serde_json::json!({
            "groupVersion": format!("{}/{}", name, preferred),
            "version": preferred,
        });
    }
    group
}

/// Create an `APIGroupList` response
pub fn group_list_json(groups: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": groups,
    })
    .to_string()
}

/// Create a `meta.k8s.io/v1` Table response
pub fn table_json(columns: &[(&str, &str)], rows: &[Vec<serde_json::Value>]) -> String {
    let columns: Vec<serde_json::Value> = columns
        .iter()
        .map(|(name, type_)| {
            serde_json::json!({
                "name": name,
                "type": type_,
                "format": "",
                "description": "",
                "priority": 0,
            })
        })
        .collect();
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|cells| serde_json::json!({ "cells": cells }))
        .collect();
    serde_json::json!({
        "kind": "Table",
        "apiVersion": "meta.k8s.io/v1",
        "metadata": {},
        "columnDefinitions": columns,
        "rows": rows,
    })
    .to_string()
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a mock namespace list JSON response
pub fn namespace_list_json(names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Namespace",
                "metadata": { "name": name }
            })
        })
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "NamespaceList",
        "metadata": { "resourceVersion": "1" },
        "items": items,
    })
    .to_string()
}

/// Create a mock pod JSON response
pub fn pod_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "labels": { "app": "web" }
        },
        "spec": {
            "containers": [{ "name": "web", "image": "nginx" }]
        }
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create the 404 the API server returns for paths of kinds it does not serve
pub fn unserved_kind_json() -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": "the server could not find the requested resource",
        "reason": "NotFound",
        "details": {},
        "code": 404
    })
    .to_string()
}

/// Create a 500 internal error response
pub fn internal_error_json(message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": "InternalError",
        "code": 500
    })
    .to_string()
}
