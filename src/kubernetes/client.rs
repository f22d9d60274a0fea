// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Connecting to the cluster that is being browsed

use crate::constants::IN_CLUSTER_NAME;
use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// A client for the browsed cluster together with its display name
pub struct ClusterConnection {
    pub client: Client,
    pub name: String,
}

/// Connect using the pod's service account, or fall back to the local kubeconfig.
///
/// In-cluster the cluster is called `local`; otherwise it is named after the
/// kubeconfig's current context.
pub async fn connect() -> Result<ClusterConnection> {
    match KConfig::incluster() {
        Ok(config) => {
            info!("Using in-cluster service account");
            let client = Client::try_from(config).context("Failed to create in-cluster client")?;
            Ok(ClusterConnection {
                client,
                name: IN_CLUSTER_NAME.to_string(),
            })
        }
        Err(e) => {
            debug!("Not running in-cluster ({}), reading kubeconfig", e);
            let kubeconfig = Kubeconfig::read().context("Failed to read kubeconfig")?;
            let name = kubeconfig
                .current_context
                .clone()
                .unwrap_or_else(|| IN_CLUSTER_NAME.to_string());
            let config = KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .context("Failed to load kubeconfig")?;
            let client = Client::try_from(config).context("Failed to create client")?;
            info!("Using kubeconfig context {}", name);
            Ok(ClusterConnection { client, name })
        }
    }
}
