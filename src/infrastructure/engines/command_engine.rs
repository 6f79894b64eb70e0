//! External command engine
//!
//! Runs an external rewind program once per pair and keeps its console
//! output next to the reconstructed state.

use crate::domain::repositories::{EngineError, ReconstructionEngine};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Program launched when none is configured
pub const DEFAULT_PROGRAM: &str = "usnjrnl_rewind";

/// Argument template used when none is configured
pub const DEFAULT_ARGS: [&str; 5] = ["-m", "{mft}", "-u", "{journal}", "{output}"];

/// File inside each output location receiving the engine's stdout/stderr
pub const ENGINE_LOG_FILE: &str = "engine.log";

const STDERR_TAIL_LINES: usize = 5;

/// Engine backed by an external program
///
/// Arguments are rendered from a template in which `{mft}`, `{journal}`
/// and `{output}` are replaced by the pair's paths. An argument that is
/// exactly a placeholder is passed as the raw path.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: OsString,
    args: Vec<String>,
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

impl CommandEngine {
    /// Creates an engine for `program` with the given argument template
    pub fn new(program: impl Into<OsString>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Returns the program
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Renders the argument template for one pair
    pub fn render_args(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Vec<OsString> {
        let placeholders = [
            ("{mft}", mft),
            ("{journal}", journal),
            ("{output}", output_dir),
        ];

        self.args
            .iter()
            .map(|arg| {
                if let Some((_, path)) = placeholders.iter().find(|(token, _)| arg.as_str() == *token) {
                    return path.as_os_str().to_os_string();
                }
                let mut rendered = arg.clone();
                for (token, path) in &placeholders {
                    if rendered.contains(token) {
                        rendered = rendered.replace(token, &path.to_string_lossy());
                    }
                }
                OsString::from(rendered)
            })
            .collect()
    }

    fn write_log(&self, output_dir: &Path, output: &Output) -> Result<(), EngineError> {
        let mut log = Vec::with_capacity(output.stdout.len() + output.stderr.len() + 32);
        log.extend_from_slice(b"== stdout ==\n");
        log.extend_from_slice(&output.stdout);
        log.extend_from_slice(b"\n== stderr ==\n");
        log.extend_from_slice(&output.stderr);
        fs::write(output_dir.join(ENGINE_LOG_FILE), log)?;
        Ok(())
    }
}

impl ReconstructionEngine for CommandEngine {
    fn rewind(&self, output_dir: &Path, mft: &Path, journal: &Path) -> Result<(), EngineError> {
        let args = self.render_args(output_dir, mft, journal);
        tracing::debug!("Launching {:?} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EngineError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        self.write_log(output_dir, &output)?;

        if !output.status.success() {
            return Err(EngineError::Failed {
                code: output.status.code(),
                message: stderr_tail(&output.stderr),
            });
        }

        Ok(())
    }
}

/// Last few non-empty stderr lines, joined for a one-line message
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return "no error output".to_string();
    }
    lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("; ")
}
