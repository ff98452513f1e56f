/// Export pipeline: run the converter, then patch the generated HTML.
use crate::config::ExportConfig;
use crate::converter;
use crate::error::ExportError;
use crate::html_patch::{self, LoadingSize};
use crate::layout::ProjectLayout;
use crate::report::ExportReport;

/// Converts one packaged game into a patched web bundle.
pub struct Exporter {
    layout: ProjectLayout,
    loading_size: LoadingSize,
    config: ExportConfig,
}

impl Exporter {
    pub fn new(layout: ProjectLayout, loading_size: LoadingSize, config: ExportConfig) -> Self {
        Self {
            layout,
            loading_size,
            config,
        }
    }

    /// Runs both steps in order. A converter failure only surfaces here when
    /// strict mode is on; otherwise a missing `index.html` is what fails.
    pub fn run(&self) -> Result<ExportReport, ExportError> {
        let outcome = converter::run(&self.layout, &self.config)?;

        let index_html = self.layout.index_html();
        let placeholders = html_patch::patch_file(&index_html, &self.loading_size).map_err(|err| {
            if err.is_missing_template() && !outcome.is_success() {
                tracing::error!(
                    path = %index_html.display(),
                    "index.html was not generated, check the converter output above"
                );
            }
            err
        })?;

        let report = ExportReport::new(&self.layout, &self.loading_size, outcome, placeholders);
        if let Some(path) = &self.config.report {
            report.write(path)?;
        }

        Ok(report)
    }
}
