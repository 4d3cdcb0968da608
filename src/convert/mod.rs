// src/convert/mod.rs

//! Conversion from hydrated datasource JSON to provisioning YAML
//!
//! The converter reads the intermediate JSON stream documented in
//! [`model`], regroups it under the provisioning document shape and emits
//! YAML. The document is rendered fully in memory and written to the sink
//! exactly once, so a failed conversion writes nothing.

mod model;

use std::io::{Read, Write};

use crate::error::{Error, Result};

pub use model::{
    DataSourceRecord, ProvisionedDataSource, ProvisioningDocument, PROVISIONING_API_VERSION,
};

/// Convert a serialized datasource collection into a provisioning document
pub fn convert<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    let records: Vec<DataSourceRecord> = serde_json::from_reader(reader)
        .map_err(|e| Error::Decode(format!("Invalid datasource collection: {e}")))?;

    let document = ProvisioningDocument {
        api_version: PROVISIONING_API_VERSION,
        datasources: records.into_iter().map(Into::into).collect(),
    };

    let yaml = serde_yaml::to_string(&document)
        .map_err(|e| Error::Encode(format!("Failed to render provisioning YAML: {e}")))?;

    writer
        .write_all(yaml.as_bytes())
        .map_err(|e| Error::Encode(format!("Failed to write provisioning document: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> &'static str {
        r#"[
            {
                "id": 1,
                "orgId": 1,
                "name": "prod-mysql",
                "type": "mysql",
                "access": "proxy",
                "url": "mysql.internal:3306",
                "user": "grafana",
                "database": "metrics",
                "isDefault": true,
                "readOnly": false,
                "version": 3,
                "jsonData": {"maxOpenConns": 10},
                "secureJsonFields": {"password": true},
                "secureJsonData": {"password": "$prod-mysql_password"}
            },
            {
                "id": 2,
                "orgId": 1,
                "name": "graphite",
                "type": "graphite",
                "access": "proxy",
                "url": "http://graphite:8080"
            }
        ]"#
    }

    #[test]
    fn test_convert_emits_one_entry_per_record() {
        let mut out = Vec::new();
        convert(sample_collection().as_bytes(), &mut out).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let entries = yaml["datasources"].as_sequence().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(yaml["apiVersion"].as_u64(), Some(1));
    }

    #[test]
    fn test_convert_passes_placeholders_through_verbatim() {
        let mut out = Vec::new();
        convert(sample_collection().as_bytes(), &mut out).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let entry = &yaml["datasources"][0];
        assert_eq!(entry["name"].as_str(), Some("prod-mysql"));
        assert_eq!(
            entry["secureJsonData"]["password"].as_str(),
            Some("$prod-mysql_password")
        );
    }

    #[test]
    fn test_convert_remaps_fields_to_provisioning_shape() {
        let mut out = Vec::new();
        convert(sample_collection().as_bytes(), &mut out).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let entry = &yaml["datasources"][0];
        assert_eq!(entry["type"].as_str(), Some("mysql"));
        assert_eq!(entry["isDefault"].as_bool(), Some(true));
        // readOnly is inverted into the provisioning format's editable flag
        assert_eq!(entry["editable"].as_bool(), Some(true));
        assert_eq!(entry["jsonData"]["maxOpenConns"].as_u64(), Some(10));
        // record ids are server-assigned and do not belong in the document
        assert!(entry.get("id").is_none());
    }

    #[test]
    fn test_convert_omits_empty_config_maps() {
        let mut out = Vec::new();
        convert(sample_collection().as_bytes(), &mut out).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        let entry = &yaml["datasources"][1];
        assert!(entry.get("jsonData").is_none());
        assert!(entry.get("secureJsonData").is_none());
    }

    #[test]
    fn test_convert_empty_collection() {
        let mut out = Vec::new();
        convert("[]".as_bytes(), &mut out).unwrap();

        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        assert_eq!(yaml["apiVersion"].as_u64(), Some(1));
        assert_eq!(yaml["datasources"].as_sequence().map(Vec::len), Some(0));
    }

    #[test]
    fn test_convert_invalid_input_is_a_decode_error() {
        let mut out = Vec::new();
        let result = convert("{not json".as_bytes(), &mut out);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_convert_writes_nothing_on_decode_failure() {
        let mut out = Vec::new();
        let _ = convert(r#"[{"name": 42}]"#.as_bytes(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_convert_write_failure_is_an_encode_error() {
        struct FailingSink;
        impl std::io::Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = convert("[]".as_bytes(), &mut FailingSink);
        assert!(matches!(result, Err(Error::Encode(_))));
    }
}
