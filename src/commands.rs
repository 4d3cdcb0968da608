// src/commands.rs
//! Command handlers for the exporter CLI

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use grafana_export::{convert, DatasourceRepository, Error, RestClient};
use tracing::info;

/// Export all datasources from a Grafana host as provisioning YAML
///
/// The hydrated collection is re-encoded to its intermediate JSON form and
/// streamed into the converter, which writes the document to the output
/// sink (a file when `output` is given, standard output otherwise).
pub fn cmd_export(host: &str, key: &str, output: Option<&Path>) -> Result<()> {
    info!("Exporting datasources from {}", host);

    let client = RestClient::new(host, key)?;
    let repository = DatasourceRepository::new(client);
    let datasources = repository.list_all()?;

    let intermediate = serde_json::to_vec(&datasources)
        .map_err(|e| Error::Encode(format!("Failed to serialize datasources: {e}")))?;

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .map_err(|e| Error::Io(format!("Failed to create {}: {e}", path.display())))?;
            convert(intermediate.as_slice(), &mut file)?;
            println!(
                "Exported {} datasources to {}",
                datasources.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            convert(intermediate.as_slice(), &mut sink)?;
            sink.flush()
                .map_err(|e| Error::Io(format!("Failed to flush output: {e}")))?;
        }
    }

    Ok(())
}
