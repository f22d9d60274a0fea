// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP front binds to
    pub listen_addr: SocketAddr,
    /// Overrides the cluster name derived from the kubeconfig
    pub cluster_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("KUBE_WEB_LISTEN_ADDR").ok(),
            env::var("CLUSTER_NAME").ok(),
        )
    }

    fn from_vars(listen_addr: Option<String>, cluster_name: Option<String>) -> Result<Self> {
        let raw = listen_addr.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .parse()
            .with_context(|| format!("KUBE_WEB_LISTEN_ADDR is not a socket address: {}", raw))?;
        let cluster_name = cluster_name.filter(|name| !name.trim().is_empty());

        Ok(Config {
            listen_addr,
            cluster_name,
        })
    }
}
