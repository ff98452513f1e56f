/// Export configuration: JSON config file merged with command line overrides.
use crate::error::ExportError;
use constants::converter::DEFAULT_PROGRAM;
use constants::layout::DEFAULT_CONFIG_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings read from `love-web-export.json`.
/// Every field may be omitted; unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Converter executable.
    pub converter: Option<String>,
    /// Emit the compatibility (non-threaded) build.
    pub compatibility: Option<bool>,
    /// Total memory for the converted game, in bytes.
    pub memory: Option<u64>,
    /// Page title, defaults to the artifact name.
    pub title: Option<String>,
    /// Treat a failed converter run as fatal.
    pub fail_on_converter_error: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let text = fs::read_to_string(path).map_err(|source| ExportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ExportError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, otherwise `<root>/love-web-export.json` when it exists.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Option<Self>, ExportError> {
        if let Some(path) = explicit {
            return Self::load(path).map(Some);
        }

        let implicit = root.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "using project config");
            return Self::load(&implicit).map(Some);
        }

        Ok(None)
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub converter: Option<String>,
    pub fail_on_converter_error: bool,
    pub skip_convert: bool,
    pub report: Option<PathBuf>,
    pub quiet: bool,
}

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub converter: String,
    pub compatibility: bool,
    pub memory: Option<u64>,
    pub title: Option<String>,
    pub fail_on_converter_error: bool,
    pub skip_convert: bool,
    pub report: Option<PathBuf>,
    pub show_progress: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            converter: DEFAULT_PROGRAM.to_string(),
            compatibility: true,
            memory: None,
            title: None,
            fail_on_converter_error: false,
            skip_convert: false,
            report: None,
            show_progress: true,
        }
    }
}

impl ExportConfig {
    pub fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            converter: overrides
                .converter
                .or(file.converter)
                .unwrap_or(defaults.converter),
            compatibility: file.compatibility.unwrap_or(defaults.compatibility),
            memory: file.memory,
            title: file.title,
            fail_on_converter_error: overrides.fail_on_converter_error
                || file.fail_on_converter_error.unwrap_or(false),
            skip_convert: overrides.skip_convert,
            report: overrides.report,
            show_progress: !overrides.quiet,
        }
    }
}
