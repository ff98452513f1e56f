/// Project directory layout shared by the converter and patch steps.
use constants::layout::{INDEX_HTML, LOVE_DIR, LOVE_EXTENSION, WEB_DIR};
use std::path::{Path, PathBuf};

/// Locates the packaged artifact and the web output inside a project root.
/// Paths are derived, never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    artifact: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, artifact: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            artifact: artifact.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// `<root>/love/<artifact>.love`
    pub fn love_file(&self) -> PathBuf {
        self.root
            .join(LOVE_DIR)
            .join(format!("{}.{}", self.artifact, LOVE_EXTENSION))
    }

    /// `<root>/web`
    pub fn web_dir(&self) -> PathBuf {
        self.root.join(WEB_DIR)
    }

    /// `<root>/web/index.html`
    pub fn index_html(&self) -> PathBuf {
        self.web_dir().join(INDEX_HTML)
    }
}
