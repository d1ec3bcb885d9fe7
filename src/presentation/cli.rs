//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --debug) are inherited by all subcommands.
//! Path options left unset fall back to the layered configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Goal;

/// Terramena - deploy NixOS hosts from Terraform output with Colmena
#[derive(Parser, Debug)]
#[command(name = "terramena")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print debugging information
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the NixOS hosts found in the Terraform state
    List {
        /// Only hosts carrying one of these tags (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Path to the Terraform state file
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Open an SSH session to a host by its hostname (-v makes ssh verbose)
    Ssh {
        /// Host to connect to, optionally as user@hostname
        target: String,

        /// Username for SSH (user@hostname takes precedence)
        #[arg(short, long)]
        user: Option<String>,

        /// Key file to use for the connection
        #[arg(short = 'i', long)]
        keyfile: Option<PathBuf>,

        /// Path to the Terraform state file
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Path to the ssh_config file
        #[arg(short = 'c', long = "sshconfig")]
        ssh_config: Option<PathBuf>,
    },

    /// Build the colmena deployment and run it
    Deploy {
        /// NixOS module root (copied into the build workspace)
        #[arg(short, long = "module")]
        module: PathBuf,

        /// Only deploy hosts carrying one of these tags (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Path to the Terraform state file
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Path to the ssh_config file
        #[arg(short = 'c', long = "sshconfig")]
        ssh_config: Option<PathBuf>,

        /// Channel file pinning nixpkgs
        #[arg(short = 'x', long)]
        channel: Option<PathBuf>,

        /// Extra files or directories copied into the workspace (comma separated)
        #[arg(short = 'p', long = "paths", value_delimiter = ',')]
        extra_paths: Vec<PathBuf>,

        /// Colmena deployment template to use instead of the installed one
        #[arg(long)]
        template: Option<PathBuf>,

        /// Colmena goal
        #[arg(long, value_enum)]
        goal: Option<Goal>,

        /// Pass --no-substitutes to colmena
        #[arg(long)]
        no_substitutes: bool,

        /// Pass --show-trace to colmena
        #[arg(long)]
        show_trace: bool,
    },
}

impl Cli {
    /// Default tracing filter directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.debug || self.verbose >= 2 {
            "terramena=debug"
        } else if self.verbose == 1 {
            "terramena=info"
        } else {
            "warn"
        }
    }
}
