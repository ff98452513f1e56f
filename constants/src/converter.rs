/// Converter executable looked up on `PATH`
pub const DEFAULT_PROGRAM: &str = "love.js";

/// Environment variable overriding the converter executable
pub const PROGRAM_ENV: &str = "LOVEJS_BIN";

/// Compatibility (non-threaded) output, served without cross-origin isolation headers
pub const FLAG_COMPATIBILITY: &str = "-c";

/// Page title flag
pub const FLAG_TITLE: &str = "-t";

/// Total memory flag, in bytes
pub const FLAG_MEMORY: &str = "-m";
