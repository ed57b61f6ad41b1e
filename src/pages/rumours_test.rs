use super::*;

#[test]
fn refresh_button_label_when_idle() {
    assert_eq!(refresh_button_label(false), "Refresh Rumours");
}

#[test]
fn refresh_button_label_while_busy() {
    assert_eq!(refresh_button_label(true), "Refreshing...");
}
