// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic list/get queries over any registered resource type

use crate::constants::{media, NAMESPACE_KIND};
use crate::error::{KubeWebError, Result};
use crate::kubernetes::registry::ResourceType;
use crate::kubernetes::table::{Table, TableResult};
use http::header::{HeaderValue, ACCEPT};
use k8s_openapi::api::core::v1::Namespace;
use kube::api::{Api, DynamicObject, ListParams};
use kube::core::Request;
use kube::{Client, ResourceExt};
use serde::Serialize;
use tracing::{debug, instrument};

/// A single fetched resource and the namespace it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct ObjectResult {
    pub resource: DynamicObject,
    /// `None` for cluster-scoped kinds; a namespace reports itself
    pub namespace: Option<String>,
}

/// List all instances of a kind as a server-side table
#[instrument(skip(client, resource_type), fields(kind = %resource_type.kind))]
pub async fn list_as_table(
    client: &Client,
    resource_type: &ResourceType,
    namespace: Option<&str>,
    selector: Option<&str>,
) -> Result<TableResult> {
    let mut lp = ListParams::default();
    if let Some(selector) = selector {
        lp = lp.labels(selector);
    }

    let mut request = Request::new(resource_type.url_path(namespace))
        .list(&lp)
        .map_err(kube::Error::BuildRequest)?;
    request
        .headers_mut()
        .insert(ACCEPT, HeaderValue::from_static(media::TABLE_ACCEPT));

    let table: Table = client.request(request).await.map_err(|e| match e {
        kube::Error::Api(err) if err.code == 404 => {
            KubeWebError::KindNotFound(resource_type.plural.clone())
        }
        e => KubeWebError::Upstream(e),
    })?;

    debug!("Listed {} rows of {}", table.rows.len(), resource_type.plural);
    Ok(TableResult::from_table(&resource_type.kind, table))
}

/// Fetch one instance of a kind by name
#[instrument(skip(client, resource_type), fields(kind = %resource_type.kind))]
pub async fn get_object(
    client: &Client,
    resource_type: &ResourceType,
    namespace: Option<&str>,
    name: &str,
) -> Result<ObjectResult> {
    let api = resource_type.api(client.clone(), namespace);

    let resource = api.get(name).await.map_err(|e| match e {
        kube::Error::Api(err) if err.code == 404 && names_instance(&err.message, name) => {
            KubeWebError::NotFound {
                plural: resource_type.plural.clone(),
                name: name.to_string(),
            }
        }
        kube::Error::Api(err) if err.code == 404 => {
            KubeWebError::KindNotFound(resource_type.plural.clone())
        }
        e => KubeWebError::Upstream(e),
    })?;

    let namespace = resolve_namespace(resource_type, &resource, namespace);
    Ok(ObjectResult {
        resource,
        namespace,
    })
}

/// Whether a 404 is about the named instance (`pods "web-0" not found`) rather
/// than the whole kind (`the server could not find the requested resource`)
fn names_instance(message: &str, name: &str) -> bool {
    message.contains(&format!("\"{}\"", name))
}

/// Namespace a fetched object is shown under
fn resolve_namespace(
    resource_type: &ResourceType,
    resource: &DynamicObject,
    namespace: Option<&str>,
) -> Option<String> {
    let kind = resource
        .types
        .as_ref()
        .map(|t| t.kind.as_str())
        .unwrap_or(resource_type.kind.as_str());

    if kind == NAMESPACE_KIND {
        Some(resource.name_any())
    } else {
        resource_type.effective_namespace(namespace).map(str::to_string)
    }
}

/// Names of all namespaces, for navigation
#[instrument(skip(client))]
pub async fn list_namespace_names(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;
    Ok(list.items.iter().map(|ns| ns.name_any()).collect())
}
