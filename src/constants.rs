// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Version of the legacy core API group served under `/api`
pub const CORE_API_VERSION: &str = "v1";

/// Kind whose instances are their own containing namespace
pub const NAMESPACE_KIND: &str = "Namespace";

/// Cluster name reported when running with an in-cluster service account
pub const IN_CLUSTER_NAME: &str = "local";

/// Discovery filtering
pub mod verbs {
    /// Verbs a resource must support to be browsable
    pub const REQUIRED: [&str; 2] = ["get", "list"];
    /// Separator that marks subresources like `pods/proxy`
    pub const SUBRESOURCE_SEPARATOR: char = '/';
}

/// Content negotiation with the API server and the browser
pub mod media {
    /// Ask the API server for a server-side tabular projection
    pub const TABLE_ACCEPT: &str = concat!(
        "application/json;as=Table;v=v1;g=meta.k8s.io,",
        "application/json;as=Table;v=v1beta1;g=meta.k8s.io"
    );
    pub const JSON: &str = "application/json";
    pub const YAML: &str = "application/yaml";
    pub const TEXT: &str = "text/plain; charset=utf-8";
    pub const TSV: &str = "text/tab-separated-values";
}

/// Query parameter values understood by the HTTP front
pub mod params {
    /// `download` value that triggers the tab-separated export
    pub const DOWNLOAD_TSV: &str = "tsv";
    /// `view` value that renders a resource as YAML
    pub const VIEW_YAML: &str = "yaml";
}
