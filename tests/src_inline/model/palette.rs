use super::*;

#[test]
fn test_cyclic_color_wraps() {
    let palette = owned(COMPETENCY_PALETTE);
    assert_eq!(cyclic_color(&palette, 1), "#e91e63");
    assert_eq!(cyclic_color(&palette, 10), "#ffeb3b");
    assert_eq!(cyclic_color(&palette, 11), "#e91e63");
    assert_eq!(cyclic_color(&[], 3), NEUTRAL_COLOR);
}

#[test]
fn test_dimension_color_neutral_outside_palette() {
    let palette = owned(DIMENSION_PALETTE);
    assert_eq!(dimension_color(&palette, 2), "#6A8CFF");
    assert_eq!(dimension_color(&palette, 4), NEUTRAL_COLOR);
    assert_eq!(dimension_color(&palette, 0), NEUTRAL_COLOR);
}

#[test]
fn test_focus_color() {
    assert_eq!(focus_color("Cliente"), "#FF6E6E");
    assert_eq!(focus_color("Trabajador"), "#7CFFCB");
    assert_eq!(focus_color("Otro"), NEUTRAL_COLOR);
}
