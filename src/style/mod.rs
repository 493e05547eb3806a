//! Colours and the closed set of named palettes.

/// sRGB colour value with hex parsing and SVG formatting.
pub mod color;
/// Year-progress themes and the fixed month-calendar palette.
pub mod theme;
