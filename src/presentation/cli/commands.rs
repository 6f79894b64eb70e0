//! CLI commands using clap

use crate::application::dto::FailurePolicy;
use crate::domain::services::PairingStrategy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// usn-rewind - USN journal rewind batch driver
///
/// Finds $MFT and $UsnJrnl:$J exports under an input directory, pairs
/// them and runs the rewind engine once per pair into Pair_1, Pair_2, ...
#[derive(Parser)]
#[command(name = "usn-rewind")]
#[command(version)]
#[command(about = "Pair MFT and USN journal exports and rewind each pair", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that discovers exports
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Directory containing the MFT and USNJRNL exports
    #[arg(short, long)]
    pub input: PathBuf,

    /// Pairing strategy (positional, base-name)
    #[arg(short, long)]
    pub pairing: Option<PairingStrategy>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewind every discovered pair
    Run {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory, created if missing
        #[arg(short, long, default_value = "./rewind_output")]
        output: PathBuf,

        /// Keep going after a pair fails
        #[arg(long)]
        continue_on_error: bool,

        /// Rewind program to launch for each pair
        #[arg(short, long)]
        engine: Option<String>,

        /// Write rewind_manifest.json into the output directory
        #[arg(long)]
        manifest: bool,

        /// Include SHA-256 digests of the exports in the manifest
        #[arg(long, requires = "manifest")]
        hash_inputs: bool,
    },

    /// Show the pairs a run would process without running anything
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

/// Resolves the failure policy: the flag wins, then the config file
pub fn resolve_failure_policy(
    continue_on_error: bool,
    from_file: Option<FailurePolicy>,
) -> FailurePolicy {
    if continue_on_error {
        FailurePolicy::ContinueOnError
    } else {
        from_file.unwrap_or_default()
    }
}
