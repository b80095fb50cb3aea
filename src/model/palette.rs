use crate::model::ids::palette_index;

pub const COMPETENCY_PALETTE: &[&str] = &[
    "#e91e63", "#9c27b0", "#3f51b5", "#2196f3", "#00bcd4", "#009688", "#4caf50", "#8bc34a",
    "#cddc39", "#ffeb3b",
];

pub const DIMENSION_PALETTE: &[&str] = &["#FF6E6E", "#6A8CFF", "#7CFFCB"];

pub const FOCUS_PALETTE: &[(&str, &str)] = &[
    ("Cliente", "#FF6E6E"),
    ("Emprendedor", "#6A8CFF"),
    ("Trabajador", "#7CFFCB"),
];

pub const NEUTRAL_COLOR: &str = "#999999";

pub fn owned(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|c| c.to_string()).collect()
}

pub fn cyclic_color(palette: &[String], id: i64) -> String {
    if palette.is_empty() {
        return NEUTRAL_COLOR.to_string();
    }
    palette[palette_index(id, palette.len())].clone()
}

/// Dimension colors do not cycle: anything past the palette is drawn neutral.
pub fn dimension_color(palette: &[String], dimension_id: i64) -> String {
    if dimension_id < 1 {
        return NEUTRAL_COLOR.to_string();
    }
    palette
        .get((dimension_id - 1) as usize)
        .cloned()
        .unwrap_or_else(|| NEUTRAL_COLOR.to_string())
}

pub fn focus_color(focus: &str) -> &'static str {
    FOCUS_PALETTE
        .iter()
        .find(|(name, _)| *name == focus)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_COLOR)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/palette.rs"]
mod tests;
