/// Project root subdirectory holding packaged `.love` artifacts
pub const LOVE_DIR: &str = "love";

/// Project root subdirectory the converter writes the web bundle into
pub const WEB_DIR: &str = "web";

/// Extension of a packaged LÖVE game
pub const LOVE_EXTENSION: &str = "love";

/// HTML entry point generated by the converter
pub const INDEX_HTML: &str = "index.html";

/// Config file picked up from the project root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "love-web-export.json";
