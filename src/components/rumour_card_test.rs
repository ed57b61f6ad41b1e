use super::*;

#[test]
fn badge_label_points_in_for_incoming() {
    assert_eq!(badge_label(RumourType::Incoming), "→ Incoming");
}

#[test]
fn badge_label_points_out_for_outgoing() {
    assert_eq!(badge_label(RumourType::Outgoing), "← Outgoing");
}
