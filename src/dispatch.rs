// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Maps browser requests onto registered resource types and runs their queries

use crate::constants::params::DOWNLOAD_TSV;
use crate::error::{KubeWebError, Result};
use crate::kubernetes::{
    get_object, list_as_table, list_namespace_names, ResourceRegistry, ResourceScope,
    ResourceType, TableResult,
};
use kube::api::DynamicObject;
use kube::Client;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One browser request, already split into path segments and query parameters
#[derive(Debug, Clone, Default)]
pub struct ResourceRequest {
    pub cluster: String,
    pub namespace: Option<String>,
    /// One plural name, or a comma-separated list for namespaced listings
    pub plural: String,
    pub name: Option<String>,
    pub selector: Option<String>,
    pub download: Option<String>,
    pub view: Option<String>,
    /// Path and query of the request, echoed back for navigation
    pub rel_url: String,
}

impl ResourceRequest {
    pub fn scope(&self) -> ResourceScope {
        if self.namespace.is_some() {
            ResourceScope::Namespaced
        } else {
            ResourceScope::Cluster
        }
    }

    fn wants_tsv(&self) -> bool {
        self.download.as_deref() == Some(DOWNLOAD_TSV)
    }
}

/// Everything a page renderer needs
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub cluster: Option<String>,
    pub namespace: Option<String>,
    pub plural: Option<String>,
    pub namespaces: Vec<String>,
    pub rel_url: String,
    #[serde(flatten)]
    pub page: Page,
}

#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Clusters {
        clusters: Vec<String>,
    },
    Cluster {
        resource_types: Vec<ResourceType>,
    },
    ResourceList {
        tables: Vec<TableResult>,
    },
    ResourceView {
        resource: DynamicObject,
        view: Option<String>,
    },
}

/// A table headed for the tab-separated exporter
#[derive(Debug)]
pub struct TableExport {
    pub table: TableResult,
    /// Request path the download file is named after
    pub path: String,
}

#[derive(Debug)]
pub enum Outcome {
    Render(PageContext),
    Export(TableExport),
}

/// Request router over the immutable startup registry
pub struct Dispatcher {
    client: Client,
    registry: Arc<ResourceRegistry>,
    cluster_name: String,
}

impl Dispatcher {
    pub fn new(client: Client, registry: Arc<ResourceRegistry>, cluster_name: String) -> Self {
        Self {
            client,
            registry,
            cluster_name,
        }
    }

    /// Look up a single plural name in one scope
    pub fn resolve(&self, scope: ResourceScope, plural: &str) -> Result<&ResourceType> {
        self.registry
            .find(plural, scope)
            .ok_or_else(|| KubeWebError::NotRegistered(plural.to_string()))
    }

    /// Resolve every name of a comma-separated list, failing on the first unknown one
    pub fn resolve_all(&self, scope: ResourceScope, plurals: &str) -> Result<Vec<&ResourceType>> {
        plurals
            .split(',')
            .map(|plural| self.resolve(scope, plural))
            .collect()
    }

    pub fn clusters(&self, rel_url: &str) -> PageContext {
        PageContext {
            cluster: None,
            namespace: None,
            plural: None,
            namespaces: Vec::new(),
            rel_url: rel_url.to_string(),
            page: Page::Clusters {
                clusters: vec![self.cluster_name.clone()],
            },
        }
    }

    /// Overview of one cluster: its namespaces and cluster-scoped kinds
    #[instrument(skip(self))]
    pub async fn cluster(&self, cluster: &str, rel_url: &str) -> Result<Outcome> {
        let page = Page::Cluster {
            resource_types: self.registry.types(ResourceScope::Cluster).to_vec(),
        };
        self.render(cluster, None, None, rel_url, page).await
    }

    /// List one kind (cluster scope) or one or more kinds (namespace scope)
    #[instrument(
        skip(self, request),
        fields(plural = %request.plural, namespace = ?request.namespace)
    )]
    pub async fn list(&self, request: &ResourceRequest) -> Result<Outcome> {
        let scope = request.scope();
        let resource_types = match scope {
            ResourceScope::Namespaced => self.resolve_all(scope, &request.plural)?,
            ResourceScope::Cluster => vec![self.resolve(scope, &request.plural)?],
        };

        if request.wants_tsv() {
            if let Some(first) = resource_types.first() {
                debug!("Exporting {} as TSV", first.plural);
                let table = self.table(first, request).await?;
                return Ok(Outcome::Export(TableExport {
                    table,
                    path: path_of(&request.rel_url).to_string(),
                }));
            }
        }

        let mut tables = Vec::with_capacity(resource_types.len());
        for resource_type in resource_types {
            tables.push(self.table(resource_type, request).await?);
        }

        self.render(
            &request.cluster,
            request.namespace.clone(),
            Some(request.plural.clone()),
            &request.rel_url,
            Page::ResourceList { tables },
        )
        .await
    }

    /// Show a single named instance
    #[instrument(skip(self, request), fields(plural = %request.plural, name = ?request.name))]
    pub async fn get(&self, request: &ResourceRequest) -> Result<Outcome> {
        let resource_type = self.resolve(request.scope(), &request.plural)?;
        let Some(name) = request.name.as_deref().filter(|n| !n.is_empty()) else {
            return Err(KubeWebError::NotFound {
                plural: resource_type.plural.clone(),
                name: String::new(),
            });
        };
        let namespace = request.namespace.as_deref();
        let object = get_object(&self.client, resource_type, namespace, name).await?;

        self.render(
            &request.cluster,
            object.namespace,
            Some(request.plural.clone()),
            &request.rel_url,
            Page::ResourceView {
                resource: object.resource,
                view: request.view.clone(),
            },
        )
        .await
    }

    async fn table(
        &self,
        resource_type: &ResourceType,
        request: &ResourceRequest,
    ) -> Result<TableResult> {
        list_as_table(
            &self.client,
            resource_type,
            request.namespace.as_deref(),
            request.selector.as_deref(),
        )
        .await
    }

    /// Attach the navigation context shared by all resource pages
    async fn render(
        &self,
        cluster: &str,
        namespace: Option<String>,
        plural: Option<String>,
        rel_url: &str,
        page: Page,
    ) -> Result<Outcome> {
        let namespaces = list_namespace_names(&self.client).await?;
        Ok(Outcome::Render(PageContext {
            cluster: Some(cluster.to_string()),
            namespace,
            plural,
            namespaces,
            rel_url: rel_url.to_string(),
            page,
        }))
    }
}

fn path_of(rel_url: &str) -> &str {
    rel_url.split('?').next().unwrap_or(rel_url)
}
