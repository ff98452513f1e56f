/// Export report describing one finished run.
use crate::converter::ConverterOutcome;
use crate::error::ExportError;
use crate::html_patch::{LoadingSize, PatchSummary};
use crate::layout::ProjectLayout;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub artifact: String,
    pub project_root: PathBuf,
    /// Packaged game handed to the converter.
    pub love_file: PathBuf,
    /// Directory holding the generated web bundle.
    pub web_dir: PathBuf,
    /// Patched HTML entry point.
    pub index_html: PathBuf,
    pub loading_size: LoadingSize,
    pub converter: ConverterOutcome,
    pub placeholders: PatchSummary,
}

impl ExportReport {
    pub fn new(
        layout: &ProjectLayout,
        loading_size: &LoadingSize,
        converter: ConverterOutcome,
        placeholders: PatchSummary,
    ) -> Self {
        Self {
            artifact: layout.artifact().to_string(),
            project_root: layout.root().to_path_buf(),
            love_file: layout.love_file(),
            web_dir: layout.web_dir(),
            index_html: layout.index_html(),
            loading_size: loading_size.clone(),
            converter,
            placeholders,
        }
    }

    /// Writes the report as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ExportError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "wrote export report");
        Ok(())
    }

    /// One line summary printed at the end of a run.
    pub fn summary(&self) -> String {
        format!(
            "Exported {} to {} (loading {}x{}, {} placeholder(s) replaced)",
            self.artifact,
            self.web_dir.display(),
            self.loading_size.width,
            self.loading_size.height,
            self.placeholders.width_replacements + self.placeholders.height_replacements,
        )
    }
}
