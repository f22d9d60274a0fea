// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::media;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum KubeWebError {
    #[error("Discovery of {group_version} failed: {source}")]
    Discovery {
        group_version: String,
        #[source]
        source: kube::Error,
    },

    #[error("Resource type not found: {0}")]
    NotRegistered(String),

    #[error("Resource type {0} is not served by the cluster")]
    KindNotFound(String),

    #[error("Resource does not exist: {plural}/{name}")]
    NotFound { plural: String, name: String },

    #[error("Kubernetes API error: {0}")]
    Upstream(#[from] kube::Error),

    #[error("Failed to render response: {0}")]
    Render(String),
}

impl KubeWebError {
    /// HTTP status reported to the browser for this error
    pub fn status(&self) -> StatusCode {
        match self {
            KubeWebError::NotRegistered(_)
            | KubeWebError::KindNotFound(_)
            | KubeWebError::NotFound { .. } => StatusCode::NOT_FOUND,
            KubeWebError::Upstream(_) => StatusCode::BAD_GATEWAY,
            KubeWebError::Discovery { .. } | KubeWebError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short text shown to the browser
    pub fn public_message(&self) -> String {
        match self {
            KubeWebError::NotRegistered(_) => "Resource type not found".to_string(),
            KubeWebError::NotFound { .. } => "Resource does not exist".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for KubeWebError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);
        (self.status(), [(CONTENT_TYPE, media::TEXT)], self.public_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, KubeWebError>;
