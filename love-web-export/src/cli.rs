/// Command line interface.
use crate::config::{ConfigFile, ExportConfig, Overrides};
use crate::error::ExportError;
use crate::html_patch::LoadingSize;
use crate::layout::ProjectLayout;
use clap::{ArgAction, Parser};
use constants::converter::PROGRAM_ENV;
use std::path::PathBuf;

/// Build a LÖVE game for the web with love.js and fill in the loading
/// indicator size in the generated index.html.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Game name, packaged as <PROJECT_ROOT>/love/<ARTIFACT>.love
    pub artifact: String,

    /// Project directory containing love/ and web/
    pub project_root: PathBuf,

    /// Replaces {LOADING_WIDTH} in web/index.html
    pub loading_width: String,

    /// Replaces {LOADING_HEIGHT} in web/index.html
    pub loading_height: String,

    /// Converter executable
    #[arg(long, env = PROGRAM_ENV)]
    pub converter: Option<String>,

    /// JSON config file (defaults to <PROJECT_ROOT>/love-web-export.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only patch an existing web/index.html
    #[arg(long)]
    pub skip_convert: bool,

    /// Exit with an error when the converter fails instead of continuing
    #[arg(long)]
    pub fail_on_converter_error: bool,

    /// Write a JSON report of the export to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only log warnings and errors, no spinner
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.project_root, &self.artifact)
    }

    pub fn loading_size(&self) -> LoadingSize {
        LoadingSize::new(&self.loading_width, &self.loading_height)
    }

    /// Merges the discovered config file with the flags given here.
    pub fn export_config(&self) -> Result<ExportConfig, ExportError> {
        let file = ConfigFile::discover(self.config.as_deref(), &self.project_root)?;

        Ok(ExportConfig::resolve(
            file,
            Overrides {
                converter: self.converter.clone(),
                fail_on_converter_error: self.fail_on_converter_error,
                skip_convert: self.skip_convert,
                report: self.report.clone(),
                quiet: self.quiet,
            },
        ))
    }
}
