// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side tabular projections (`meta.k8s.io` Table) and their flattened form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of a `Table` response
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub column_definitions: Vec<TableColumnDefinition>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TableColumnDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<Value>,
}

/// Column of a [`TableResult`]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Semantic type hint from the server, e.g. `string`, `integer`, `date`
    #[serde(rename = "type")]
    pub type_hint: String,
}

/// A listing as columns plus rows of display strings
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TableResult {
    /// Kind the listing belongs to
    pub kind: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TableResult {
    pub fn from_table(kind: &str, table: Table) -> Self {
        let columns = table
            .column_definitions
            .into_iter()
            .map(|c| Column {
                name: c.name,
                type_hint: c.type_,
            })
            .collect();
        let rows = table
            .rows
            .into_iter()
            .map(|row| row.cells.iter().map(display_cell).collect())
            .collect();

        Self {
            kind: kind.to_string(),
            columns,
            rows,
        }
    }
}

/// Display form of a cell value: strings verbatim, null as empty
pub fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
