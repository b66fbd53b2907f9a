use crate::logger::use_color;

#[test]
fn test_colors_only_when_requested_and_on_terminal() {
    assert!(use_color(true, true));
    assert!(!use_color(true, false));
    assert!(!use_color(false, true));
    assert!(!use_color(false, false));
}
