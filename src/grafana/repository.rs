// src/grafana/repository.rs

//! Two-phase datasource retrieval
//!
//! The enumeration endpoint omits sensitive configuration, so every summary
//! is re-fetched through the per-id detail endpoint before placeholders are
//! synthesized. Any failure at any stage aborts the whole run.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::client::RestClient;
use super::datasource::{DataSource, DataSourceSummary};
use crate::error::{Error, Result};

/// Enumeration endpoint path; detail records live at `<path>/{id}`
const DATASOURCES_PATH: &str = "api/datasources";

/// Retrieves fully hydrated datasource records from a Grafana host
pub struct DatasourceRepository {
    client: RestClient,
}

impl DatasourceRepository {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Fetch every datasource, fully hydrated and placeholder-populated
    ///
    /// Records are returned in server enumeration order. The detail
    /// response is authoritative: the summary only contributes the id used
    /// to fetch it. There is no partial-success mode; the first transport
    /// error, non-200 status or decode failure ends the run.
    pub fn list_all(&self) -> Result<Vec<DataSource>> {
        let (raw, code) = self.client.get(DATASOURCES_PATH, &BTreeMap::new())?;
        if code != 200 {
            return Err(Error::UnexpectedStatus(code));
        }

        let summaries: Vec<DataSourceSummary> = serde_json::from_slice(&raw)
            .map_err(|e| Error::Decode(format!("Malformed datasource list: {e}")))?;
        info!("Server reports {} datasources", summaries.len());

        let mut datasources = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let mut ds = self.fetch(summary.id)?;
            ds.populate_placeholders();
            debug!(
                "Hydrated datasource '{}' (id {}, {} secure fields)",
                ds.name,
                ds.id,
                ds.secure_json_data.len()
            );
            datasources.push(ds);
        }

        Ok(datasources)
    }

    /// Fetch one full record by identifier
    fn fetch(&self, id: i64) -> Result<DataSource> {
        let path = format!("{DATASOURCES_PATH}/{id}");
        let (raw, code) = self.client.get(&path, &BTreeMap::new())?;
        if code != 200 {
            return Err(Error::UnexpectedStatus(code));
        }

        serde_json::from_slice(&raw)
            .map_err(|e| Error::Decode(format!("Malformed datasource record {id}: {e}")))
    }
}
