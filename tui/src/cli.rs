//! Command-line arguments for the `ember` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::EmberConfig;

/// Compare text against a set of reference texts by embedding similarity.
#[derive(Debug, Parser)]
#[command(name = "ember", author, version, about)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Embedding model to request.
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the embeddings API.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// JSON file of pre-computed default comparisons (see `ember seed`).
    #[arg(long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Log file for the interactive session.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Embed comparison texts and print them as JSON for `--defaults`.
    Seed {
        /// Texts to embed. Defaults to the built-in comparison texts.
        texts: Vec<String>,
    },
}

impl Cli {
    /// Load the config file, if any, then apply flag overrides.
    pub fn resolve_config(&self) -> anyhow::Result<EmberConfig> {
        let mut config = match &self.config {
            Some(path) => EmberConfig::load(path)?,
            None => EmberConfig::default(),
        };

        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(path) = &self.defaults {
            config = config.with_defaults_path(path);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }

        Ok(config)
    }
}
