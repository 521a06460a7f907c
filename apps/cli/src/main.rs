// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panelsmith CLI - generate faceplates from panel documents.
//!
//! # Commands
//!
//! - `generate <document.json>` - import a document and print a generation summary
//! - `export-default` - print the default panel as a document
//! - `catalog` - print every preset table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panelsmith_core::{import_document, PanelDocument, PanelModel};
use panelsmith_geometry::{OverlayKernel, PanelGenerator};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod summary;

use config::Config;
use summary::{CatalogSummary, GenerateSummary};

#[derive(Parser)]
#[command(name = "panelsmith")]
#[command(about = "Parametric modular-synth faceplate generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a panel from a JSON document and print a summary
    Generate {
        /// Panel document (`{vp, hp, holes, features}`)
        document: PathBuf,
    },
    /// Print the default panel as a JSON document
    ExportDefault,
    /// Print the reference catalog
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(circle_segments = config.circle_segments, "Loaded configuration");

    match cli.command {
        Commands::Generate { document } => generate(&document, &config),
        Commands::ExportDefault => export_default(),
        Commands::Catalog => print_json(&CatalogSummary::collect()),
    }
}

fn generate(path: &Path, config: &Config) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let model = import_document(&json, &PanelModel::default())
        .with_context(|| format!("failed to import {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        features = model.features.len(),
        "Generating panel"
    );

    let mut generator = PanelGenerator::with_kernel(OverlayKernel::new(config.circle_segments));
    let panel = generator.generate(&model).context("panel generation failed")?;

    print_json(&GenerateSummary::from_panel(&panel))
}

fn export_default() -> Result<()> {
    let document = PanelDocument::from_model(&PanelModel::default())?;
    println!("{}", document.to_json()?);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
