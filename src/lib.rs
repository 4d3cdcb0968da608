// src/lib.rs

//! Grafana datasource export
//!
//! Retrieves datasource configuration from a running Grafana over its
//! admin HTTP API and re-serializes it into a YAML provisioning document
//! that can be checked into version control and replayed elsewhere.
//!
//! # Architecture
//!
//! - Two-phase fetch: the enumeration endpoint omits secrets, so every
//!   record is re-fetched by id before use
//! - Secrets are never disclosed by the server; each populated secure
//!   field is replaced by a `$<name>_<field>` placeholder token
//! - One-shot and stateless: nothing is cached or persisted between runs

pub mod convert;
mod error;
pub mod grafana;

pub use convert::{convert, ProvisionedDataSource, ProvisioningDocument};
pub use error::{Error, Result};
pub use grafana::{DataSource, DataSourceSummary, DatasourceRepository, RestClient};
