// src/convert/model.rs

//! Intermediate and provisioning document schemas
//!
//! `DataSourceRecord` is the documented intermediate shape the converter
//! reads: the JSON serialization of a hydrated datasource collection. It is
//! deliberately its own type so the converter depends on this schema rather
//! than on the retrieval code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema marker expected by the provisioning loader
pub const PROVISIONING_API_VERSION: u32 = 1;

/// One hydrated datasource record in the intermediate JSON stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRecord {
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
    #[serde(default)]
    pub json_data: BTreeMap<String, Value>,
    #[serde(default)]
    pub secure_json_data: BTreeMap<String, String>,
}

/// Top-level provisioning document
#[derive(Debug, Serialize)]
pub struct ProvisioningDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: u32,
    pub datasources: Vec<ProvisionedDataSource>,
}

/// One datasource entry in the provisioning document
///
/// Field names follow the provisioning file format; `editable` is the
/// negation of the API's `readOnly`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedDataSource {
    pub name: String,
    #[serde(rename = "type")]
    pub ds_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub org_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub basic_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    pub with_credentials: bool,
    pub is_default: bool,
    pub version: i64,
    pub editable: bool,
    /// Non-secret configuration values
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub json_data: BTreeMap<String, Value>,
    /// Placeholder tokens, emitted verbatim
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub secure_json_data: BTreeMap<String, String>,
}

impl From<DataSourceRecord> for ProvisionedDataSource {
    fn from(record: DataSourceRecord) -> Self {
        Self {
            name: record.name,
            ds_type: record.ds_type,
            uid: record.uid,
            org_id: record.org_id,
            access: record.access,
            url: record.url,
            user: record.user,
            database: record.database,
            basic_auth: record.basic_auth,
            basic_auth_user: record.basic_auth_user,
            with_credentials: record.with_credentials,
            is_default: record.is_default,
            version: record.version,
            editable: !record.read_only,
            json_data: record.json_data,
            secure_json_data: record.secure_json_data,
        }
    }
}
