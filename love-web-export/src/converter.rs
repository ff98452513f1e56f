/// `love.js` invocation turning a packaged game into a web bundle.
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::layout::ProjectLayout;
use constants::converter::{FLAG_COMPATIBILITY, FLAG_MEMORY, FLAG_TITLE};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::{Command, Output};
use std::time::Duration;

/// Resolved converter command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    program: String,
    args: Vec<OsString>,
}

impl ConverterCommand {
    /// Builds `<program> [-c] -t <title> [-m <bytes>] <root>/love/<artifact>.love <root>/web`.
    pub fn new(layout: &ProjectLayout, config: &ExportConfig) -> Self {
        let mut args: Vec<OsString> = Vec::new();

        if config.compatibility {
            args.push(FLAG_COMPATIBILITY.into());
        }

        args.push(FLAG_TITLE.into());
        args.push(config.title.as_deref().unwrap_or(layout.artifact()).into());

        if let Some(memory) = config.memory {
            args.push(FLAG_MEMORY.into());
            args.push(memory.to_string().into());
        }

        args.push(layout.love_file().into_os_string());
        args.push(layout.web_dir().into_os_string());

        Self {
            program: config.converter.clone(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// npm installs `love.js` as a `.cmd` shim on Windows, which only the
    /// command interpreter can resolve.
    fn to_command(&self) -> Command {
        if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(&self.program).args(&self.args);
            command
        } else {
            let mut command = Command::new(&self.program);
            command.args(&self.args);
            command
        }
    }

    /// Runs the converter to completion, capturing its output.
    pub fn execute(&self) -> io::Result<Output> {
        self.to_command().output()
    }
}

impl fmt::Display for ConverterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What happened to the converter step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConverterOutcome {
    Succeeded,
    Failed { code: Option<i32> },
    SpawnFailed { reason: String },
    Skipped,
}

impl ConverterOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Skipped)
    }
}

/// Runs the converter for `layout`.
///
/// Failures are logged and reported through the outcome; they only become
/// errors when `config.fail_on_converter_error` is set.
pub fn run(layout: &ProjectLayout, config: &ExportConfig) -> Result<ConverterOutcome, ExportError> {
    if config.skip_convert {
        tracing::info!("skipping converter, patching existing bundle");
        return Ok(ConverterOutcome::Skipped);
    }

    let command = ConverterCommand::new(layout, config);
    tracing::info!(command = %command, "running converter");

    if !layout.love_file().is_file() {
        tracing::warn!(path = %layout.love_file().display(), "packaged game not found");
    }

    let spinner = config.show_progress.then(|| start_spinner(layout.artifact()));
    let result = command.execute();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = match result {
        Ok(output) => {
            log_output(&output);
            if output.status.success() {
                ConverterOutcome::Succeeded
            } else {
                ConverterOutcome::Failed {
                    code: output.status.code(),
                }
            }
        }
        Err(source) => {
            if config.fail_on_converter_error {
                return Err(ExportError::ConverterSpawn {
                    program: command.program().to_string(),
                    source,
                });
            }
            ConverterOutcome::SpawnFailed {
                reason: source.to_string(),
            }
        }
    };

    match &outcome {
        ConverterOutcome::Failed { code } if config.fail_on_converter_error => {
            return Err(ExportError::ConverterFailed {
                program: command.program().to_string(),
                code: *code,
            });
        }
        ConverterOutcome::Failed { code } => {
            tracing::warn!(program = command.program(), ?code, "converter failed, continuing");
        }
        ConverterOutcome::SpawnFailed { reason } => {
            tracing::warn!(
                program = command.program(),
                %reason,
                "could not launch converter, continuing"
            );
        }
        ConverterOutcome::Succeeded | ConverterOutcome::Skipped => {
            tracing::info!(output = %layout.web_dir().display(), "converter finished");
        }
    }

    Ok(outcome)
}

fn start_spinner(artifact: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    pb.set_message(format!("Converting {artifact}.love"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn log_output(output: &Output) {
    for line in String::from_utf8_lossy(&output.stdout).lines() {
        tracing::debug!(target: "love_web_export::converter::stdout", "{line}");
    }

    let failed = !output.status.success();
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        if failed {
            tracing::warn!(target: "love_web_export::converter::stderr", "{line}");
        } else {
            tracing::debug!(target: "love_web_export::converter::stderr", "{line}");
        }
    }
}
