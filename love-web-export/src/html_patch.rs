/// Loading indicator placeholder substitution in the generated HTML entry point.
use crate::error::ExportError;
use constants::placeholder::{LOADING_HEIGHT, LOADING_WIDTH};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Loading indicator dimensions, inserted into the HTML exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingSize {
    pub width: String,
    pub height: String,
}

impl LoadingSize {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Number of placeholder occurrences replaced in one patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PatchSummary {
    pub width_replacements: usize,
    pub height_replacements: usize,
}

impl PatchSummary {
    pub fn is_noop(&self) -> bool {
        self.width_replacements == 0 && self.height_replacements == 0
    }
}

/// Replaces every width token, then every height token.
/// Each pass is literal; the height pass sees the width values already
/// inserted, and the counts are what each pass actually replaced.
pub fn substitute(html: &str, size: &LoadingSize) -> (String, PatchSummary) {
    let width_replacements = html.matches(LOADING_WIDTH).count();
    let widened = html.replace(LOADING_WIDTH, &size.width);

    let height_replacements = widened.matches(LOADING_HEIGHT).count();
    let patched = widened.replace(LOADING_HEIGHT, &size.height);

    (
        patched,
        PatchSummary {
            width_replacements,
            height_replacements,
        },
    )
}

/// Patches `index_html` in place.
///
/// A file without placeholders is rewritten unchanged; a missing file is an
/// error and nothing is created.
pub fn patch_file(index_html: &Path, size: &LoadingSize) -> Result<PatchSummary, ExportError> {
    let html = fs::read_to_string(index_html).map_err(|source| ExportError::ReadTemplate {
        path: index_html.to_path_buf(),
        source,
    })?;

    let (patched, summary) = substitute(&html, size);

    fs::write(index_html, patched).map_err(|source| ExportError::WriteTemplate {
        path: index_html.to_path_buf(),
        source,
    })?;

    if summary.is_noop() {
        tracing::warn!(
            path = %index_html.display(),
            "no loading placeholders found, html left unchanged"
        );
    } else {
        tracing::debug!(
            path = %index_html.display(),
            width = summary.width_replacements,
            height = summary.height_replacements,
            "replaced loading placeholders"
        );
    }

    Ok(summary)
}
