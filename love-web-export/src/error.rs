/// Error types for the web export pipeline.
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The generated HTML entry point could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadTemplate { path: PathBuf, source: io::Error },

    /// The patched HTML could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    WriteTemplate { path: PathBuf, source: io::Error },

    /// The converter process could not be started.
    #[error("failed to launch converter `{program}`: {source}")]
    ConverterSpawn { program: String, source: io::Error },

    /// The converter ran but reported failure.
    #[error("converter `{program}` exited with {}", describe_code(*code))]
    ConverterFailed { program: String, code: Option<i32> },

    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    WriteReport { path: PathBuf, source: io::Error },

    #[error("failed to serialize report: {0}")]
    SerializeReport(#[from] serde_json::Error),
}

impl ExportError {
    /// True for the template read error caused by a missing `index.html`.
    pub fn is_missing_template(&self) -> bool {
        matches!(
            self,
            Self::ReadTemplate { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
