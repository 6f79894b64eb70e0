use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use console::style;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use usn_rewind::infrastructure::config::FileConfig;
use usn_rewind::infrastructure::observers::{Fanout, TracingObserver};
use usn_rewind::infrastructure::persistence::RunManifestWriter;
use usn_rewind::presentation::cli::{
    Cli, Commands, ProgressReporter, SelectionArgs, resolve_failure_policy,
};
use usn_rewind::{RewindError, RunConfig, RunRewindUseCase, plan};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool, debug: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref(), verbose, debug))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` directives when set and valid, WARN otherwise. `-v`/`-d`
/// set the global level on top.
fn build_filter(directives: Option<&str>, verbose: bool, debug: bool) -> EnvFilter {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(tracing::Level::WARN.as_str()));

    if debug {
        filter.add_directive(tracing::Level::TRACE.into())
    } else if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn load_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::load(path).context("Failed to load configuration"),
        None => Ok(FileConfig::default()),
    }
}

fn run_config(selection: &SelectionArgs, output: &Path, file: &FileConfig) -> RunConfig {
    RunConfig::new(&selection.input, output)
        .with_markers(file.markers())
        .with_pairing(selection.pairing.or(file.run.pairing).unwrap_or_default())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let file = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            selection,
            output,
            continue_on_error,
            engine,
            manifest,
            hash_inputs,
        } => {
            let config = run_config(&selection, &output, &file).with_failure_policy(
                resolve_failure_policy(continue_on_error, file.run.failure_policy),
            );
            let engine = file.command_engine(engine.as_deref());
            tracing::info!(
                "Run: input={} output={} engine={:?} pairing={} policy={}",
                config.input_root.display(),
                config.output_root.display(),
                engine.program(),
                config.pairing,
                config.failure_policy
            );

            let reporter = ProgressReporter::new();
            let observer = Fanout::new().with(&TracingObserver).with(&reporter);
            let started_at = Utc::now();

            let report = match RunRewindUseCase::new(engine).execute(&config, &observer) {
                Ok(report) => report,
                Err(e) => return Ok(report_stop(&e)),
            };

            tracing::debug!("Run finished: {}", report.summary());

            if manifest {
                RunManifestWriter::new(hash_inputs)
                    .write(&config, &report, started_at)
                    .context("Failed to write run manifest")?;
            }

            if let Some(failure) = report.first_failure() {
                eprintln!(
                    "{} pair {} ({}): {}",
                    style("An error occurred in").red().bold(),
                    failure.pair.index(),
                    failure.output.display(),
                    failure.status
                );
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Plan { selection } => {
            let config = run_config(&selection, Path::new("."), &file);
            let reporter = ProgressReporter::new();

            let pairs = match plan(&config, &reporter) {
                Ok(pairs) => pairs,
                Err(e) => return Ok(report_stop(&e)),
            };

            for pair in &pairs {
                println!(
                    "{} {}\n  MFT: {}\n  USNJRNL: {}",
                    style(pair.dir_name()).cyan().bold(),
                    style(format!("({} pairing)", config.pairing)).dim(),
                    pair.mft().display(),
                    pair.journal().display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Reports an error that stopped the run before the batch loop
fn report_stop(error: &RewindError) -> ExitCode {
    let kind = if error.is_configuration() {
        "Configuration error"
    } else if error.is_discovery() {
        "Discovery error"
    } else {
        "Error"
    };
    tracing::error!("{}", error);
    eprintln!("{} {}", style(format!("{}:", kind)).red().bold(), error);
    ExitCode::from(2)
}
