// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Runtime resource type handles and the startup registry holding them.

use crate::error::Result;
use crate::kubernetes::discovery::{discover, ResourceDescriptor};
use kube::api::{Api, DynamicObject};
use kube::discovery::ApiResource;
use kube::{Client, Resource};
use serde::Serialize;
use tracing::info;

/// Whether a request addresses cluster-wide or namespaced kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceScope {
    Cluster,
    Namespaced,
}

/// Handle for one discovered kind, usable for generic queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    pub kind: String,
    pub plural: String,
    pub api_version: String,
    pub namespaced: bool,
}

impl ResourceType {
    pub fn scope(&self) -> ResourceScope {
        if self.namespaced {
            ResourceScope::Namespaced
        } else {
            ResourceScope::Cluster
        }
    }

    /// Dynamic type information for `DynamicObject` APIs
    pub fn api_resource(&self) -> ApiResource {
        let (group, version) = match self.api_version.split_once('/') {
            Some((group, version)) => (group.to_string(), version.to_string()),
            None => (String::new(), self.api_version.clone()),
        };
        ApiResource {
            group,
            version,
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
            plural: self.plural.clone(),
        }
    }

    /// The namespace a query is actually scoped to; cluster-scoped kinds ignore it
    pub fn effective_namespace<'a>(&self, namespace: Option<&'a str>) -> Option<&'a str> {
        namespace.filter(|_| self.namespaced)
    }

    /// Collection URL, e.g. `/apis/apps/v1/namespaces/default/deployments`
    pub fn url_path(&self, namespace: Option<&str>) -> String {
        DynamicObject::url_path(&self.api_resource(), self.effective_namespace(namespace))
    }

    pub fn api(&self, client: Client, namespace: Option<&str>) -> Api<DynamicObject> {
        let ar = self.api_resource();
        match self.effective_namespace(namespace) {
            Some(ns) => Api::namespaced_with(client, ns, &ar),
            None => Api::all_with(client, &ar),
        }
    }
}

impl From<ResourceDescriptor> for ResourceType {
    fn from(d: ResourceDescriptor) -> Self {
        Self {
            kind: d.kind,
            plural: d.plural,
            api_version: d.api_version,
            namespaced: d.namespaced,
        }
    }
}

/// Every resource type the cluster served at startup, split by scope.
/// Built once and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    cluster: Vec<ResourceType>,
    namespaced: Vec<ResourceType>,
}

impl ResourceRegistry {
    /// Run discovery and build the registry from its output
    pub async fn discover(client: &Client) -> Result<Self> {
        let registry = Self::from_descriptors(discover(client).await?);
        info!(
            "Registered {} cluster-scoped and {} namespaced resource types",
            registry.cluster.len(),
            registry.namespaced.len()
        );
        Ok(registry)
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ResourceDescriptor>) -> Self {
        let mut registry = Self::default();
        for descriptor in descriptors {
            let resource_type = ResourceType::from(descriptor);
            match resource_type.scope() {
                ResourceScope::Cluster => registry.cluster.push(resource_type),
                ResourceScope::Namespaced => registry.namespaced.push(resource_type),
            }
        }
        registry
    }

    /// First registered type with this plural name in the given scope
    pub fn find(&self, plural: &str, scope: ResourceScope) -> Option<&ResourceType> {
        self.types(scope).iter().find(|t| t.plural == plural)
    }

    pub fn types(&self, scope: ResourceScope) -> &[ResourceType] {
        match scope {
            ResourceScope::Cluster => &self.cluster,
            ResourceScope::Namespaced => &self.namespaced,
        }
    }
}
