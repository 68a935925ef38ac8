//! CLI for checking ORCID identifier checksums.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use orcid_core::config;
use orcid_core::policy::OrcidPolicy;
use std::path::PathBuf;

use commands::{run_check, run_check_digit};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "orcid-check")]
#[command(about = "Check ORCID identifier URIs against their ISO 7064 MOD 11-2 check symbol", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/orcid-check/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one value, e.g. https://orcid.org/0000-0002-1825-0097.
    Check {
        /// Value to check. Parsed as an IRI when it is an absolute URL.
        value: String,

        /// Treat the value as a literal, never as an IRI.
        #[arg(long)]
        literal: bool,

        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute the check symbol for 15 payload digits (hyphens are ignored).
    CheckDigit {
        /// Payload digits, e.g. 0000-0002-1825-009.
        digits: String,
    },
}

impl CliCommand {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CliCommand::Check { .. } => "check",
            CliCommand::CheckDigit { .. } => "check-digit",
        }
    }

    /// Parses arguments and runs the command. `Ok(false)` means a blocking check failure.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => config::config_path()?,
        };
        // An explicit --config must already exist; the XDG default is created on first use.
        let cfg = if cli.config.is_some() {
            config::load_from(&config_path)?
        } else {
            config::load_or_init_at(&config_path)?
        };
        tracing::info!(
            command = cli.command.name(),
            config = %config_path.display(),
            "orcid-check {}",
            env!("CARGO_PKG_VERSION")
        );
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                value,
                literal,
                json,
            } => {
                let policy = OrcidPolicy::from_config(&cfg.policy);
                run_check(&policy, &value, literal, json)
            }
            CliCommand::CheckDigit { digits } => {
                run_check_digit(&digits)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
