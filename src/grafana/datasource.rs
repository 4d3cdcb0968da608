// src/grafana/datasource.rs

//! Datasource record types
//!
//! Two distinct shapes model the two phases of retrieval: the enumeration
//! endpoint returns summaries, the per-id detail endpoint returns the full
//! record including the secure-field flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary entry from the enumeration endpoint
///
/// Only the identifier is trusted from this shape; the full record fetched
/// by id is authoritative for everything else.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub ds_type: String,
}

/// Full datasource record from the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: i64,
    #[serde(default)]
    pub org_id: i64,
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub ds_type: String,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub basic_auth: bool,
    #[serde(default)]
    pub basic_auth_user: Option<String>,
    #[serde(default)]
    pub with_credentials: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub version: i64,
    /// Non-secret configuration values
    #[serde(default)]
    pub json_data: BTreeMap<String, Value>,
    /// Per-field "is it set" flags reported by the server
    #[serde(default)]
    pub secure_json_fields: BTreeMap<String, bool>,
    /// Placeholder tokens for undisclosed secrets
    ///
    /// The server never returns this map; it is populated during hydration
    /// from `secure_json_fields`.
    #[serde(default)]
    pub secure_json_data: BTreeMap<String, String>,
}

impl DataSource {
    /// Synthesize placeholder tokens for every secure field the server
    /// reports as set
    ///
    /// Fields whose flag is false get no entry, and any previous content
    /// of the placeholder map is discarded.
    pub fn populate_placeholders(&mut self) {
        self.secure_json_data = self
            .secure_json_fields
            .iter()
            .filter(|(_, set)| **set)
            .map(|(field, _)| (field.clone(), placeholder(&self.name, field)))
            .collect();
    }
}

/// Placeholder token for an undisclosed secret value
///
/// The `$<name>_<field>` format is a contract with downstream provisioning
/// tooling and must not change.
pub fn placeholder(name: &str, field: &str) -> String {
    format!("${}_{}", name, field)
}
