//! Web export of packaged LÖVE games through love.js
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod exporter;
pub mod html_patch;
pub mod layout;
pub mod logging;
pub mod report;

pub use error::ExportError;
pub use exporter::Exporter;
