// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource discovery against the live API server.
//!
//! Walks the legacy core group and every named API group, keeping only
//! top-level resources that can be both listed and fetched. Within a group the
//! preferred version wins; resources that only exist in older or newer versions
//! are still surfaced.

use crate::constants::{verbs, CORE_API_VERSION};
use crate::error::{KubeWebError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIGroup, APIResource, APIResourceList};
use kube::Client;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A resource kind the cluster serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub kind: String,
    pub plural: String,
    pub api_version: String,
    pub namespaced: bool,
}

impl ResourceDescriptor {
    fn new(api_version: &str, resource: &APIResource) -> Self {
        Self {
            kind: resource.kind.clone(),
            plural: resource.name.clone(),
            api_version: api_version.to_string(),
            namespaced: resource.namespaced,
        }
    }
}

/// Discover every browsable resource kind the cluster currently serves.
///
/// Any failing discovery call aborts the whole run.
#[instrument(skip(client))]
pub async fn discover(client: &Client) -> Result<Vec<ResourceDescriptor>> {
    let core = client
        .list_core_api_resources(CORE_API_VERSION)
        .await
        .map_err(|source| KubeWebError::Discovery {
            group_version: CORE_API_VERSION.to_string(),
            source,
        })?;

    let mut descriptors: Vec<ResourceDescriptor> = core
        .resources
        .iter()
        .filter(|r| is_browsable(r))
        .map(|r| ResourceDescriptor::new(CORE_API_VERSION, r))
        .collect();

    let groups = client
        .list_api_groups()
        .await
        .map_err(|source| KubeWebError::Discovery {
            group_version: "/apis".to_string(),
            source,
        })?;

    for group in &groups.groups {
        let Some(preferred) = preferred_version(group) else {
            debug!("API group {} advertises no versions, skipping", group.name);
            continue;
        };

        let mut lists = Vec::with_capacity(group.versions.len());
        for version in &group.versions {
            let group_version = &version.group_version;
            debug!("Collecting resources for {}..", group_version);
            let list = client
                .list_api_group_resources(group_version)
                .await
                .map_err(|source| KubeWebError::Discovery {
                    group_version: group_version.clone(),
                    source,
                })?;
            lists.push((group_version.clone(), list));
        }

        descriptors.extend(select_group_resources(preferred, &lists));
    }

    debug!("Discovered {} resource types", descriptors.len());
    Ok(descriptors)
}

/// The group's preferred version, or its first advertised one
fn preferred_version(group: &APIGroup) -> Option<&str> {
    group
        .preferred_version
        .as_ref()
        .or_else(|| group.versions.first())
        .map(|v| v.group_version.as_str())
}

/// Top-level resources that support both `get` and `list`
pub fn is_browsable(resource: &APIResource) -> bool {
    !resource.name.contains(verbs::SUBRESOURCE_SEPARATOR)
        && verbs::REQUIRED
            .iter()
            .all(|verb| resource.verbs.iter().any(|v| v == verb))
}

/// Merge the resource lists of all versions of one group.
///
/// Everything from the preferred version comes first, in server order. Entries
/// that only appear in other versions follow, unless the preferred version
/// already provided a resource with the same name.
pub fn select_group_resources(
    preferred: &str,
    lists: &[(String, APIResourceList)],
) -> Vec<ResourceDescriptor> {
    let mut selected = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut non_preferred = Vec::new();

    for (group_version, list) in lists {
        for resource in list.resources.iter().filter(|r| is_browsable(r)) {
            if group_version == preferred {
                selected.push(ResourceDescriptor::new(group_version, resource));
                seen.insert(resource.name.as_str());
            } else {
                non_preferred.push((group_version.as_str(), resource));
            }
        }
    }

    selected.extend(
        non_preferred
            .into_iter()
            .filter(|(_, resource)| !seen.contains(resource.name.as_str()))
            .map(|(group_version, resource)| ResourceDescriptor::new(group_version, resource)),
    );
    selected
}
