/// Token in the generated `index.html` replaced with the loading indicator width
pub const LOADING_WIDTH: &str = "{LOADING_WIDTH}";

/// Token in the generated `index.html` replaced with the loading indicator height
pub const LOADING_HEIGHT: &str = "{LOADING_HEIGHT}";
