//! Value parsers for clap arguments backed by core `FromStr` impls

use arrakis_core::format::OutputFormat;
use arrakis_core::render::RenderStyle;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse render style from string
pub fn parse_render_style(s: &str) -> std::result::Result<RenderStyle, String> {
    s.parse::<RenderStyle>().map_err(|e| e.to_string())
}

/// Parse a strictly positive count
pub fn parse_positive(s: &str) -> std::result::Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
