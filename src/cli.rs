// src/cli.rs
//! CLI definitions for the datasource exporter
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "grafana-export")]
#[command(version)]
#[command(about = "Export Grafana datasources into a YAML provisioning file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve datasources from an existing Grafana and export them as
    /// a YAML provisioning document
    Export {
        /// Grafana host, e.g. https://grafana.example.com
        #[arg(short = 'H', long)]
        host: String,

        /// API key with Admin rights from Grafana
        #[arg(short, long)]
        key: String,

        /// Write the document to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
