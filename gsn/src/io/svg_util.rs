use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub theme: SvgLayoutThemes,
    /// Draws the padded footprint (rotated bounding box + spacing) of every placed part
    pub footprints: bool,
    /// Marks the anchor of every placed part
    pub anchors: bool,
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: &'static str,
    pub part_fill: &'static str,
    pub footprint_stroke: &'static str,
    pub anchor_fill: &'static str,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        EARTH_TONES_THEME
    }
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    sheet_fill: "#CC824A",
    part_fill: "#FFC879",
    footprint_stroke: "#2D2D2D",
    anchor_fill: "#FF0000",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    sheet_fill: "#C3C3C3",
    part_fill: "#8F8F8F",
    footprint_stroke: "#636363",
    anchor_fill: "#000000",
};
