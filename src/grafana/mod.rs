// src/grafana/mod.rs

//! Grafana admin API access
//!
//! This module provides functionality for:
//! - Issuing authenticated requests against a Grafana host
//! - Enumerating and hydrating datasource records
//! - Reconstructing placeholder tokens for undisclosed secrets

mod client;
mod datasource;
mod repository;

pub use client::RestClient;
pub use datasource::{placeholder, DataSource, DataSourceSummary};
pub use repository::DatasourceRepository;
