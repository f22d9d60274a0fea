// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes side of the browser: connecting, discovering resource kinds, and
//! querying them generically.

pub mod client;
pub mod discovery;
pub mod query;
pub mod registry;
pub mod table;

pub use client::{connect, ClusterConnection};
pub use discovery::{discover, ResourceDescriptor};
pub use query::{get_object, list_as_table, list_namespace_names, ObjectResult};
pub use registry::{ResourceRegistry, ResourceScope, ResourceType};
pub use table::{Column, TableResult};
