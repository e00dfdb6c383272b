//! Embedded chart font.
//!
//! Plotters' `ab_glyph` backend only draws fonts registered by name, so the
//! family used by `charts` is backed by DejaVu Sans compiled into the binary.

use plotters::style::{FontStyle, register_font};

use crate::error::{AppError, ErrorKind};

/// Family name the chart text asks for.
pub const CHART_FONT_FAMILY: &str = "sans-serif";

const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Register the embedded font under `CHART_FONT_FAMILY`. Safe to call repeatedly.
pub fn register_chart_font() -> Result<(), AppError> {
    register_font(CHART_FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS)
        .map_err(|_| AppError::new(ErrorKind::Output, "Embedded chart font is not a valid TrueType font."))
}
