use super::*;

#[test]
fn markers_round_trip_for_every_overlay() {
    for overlay in [Overlay::ProfileMenu, Overlay::NotificationPanel] {
        assert_eq!(overlay_from_marker(overlay_marker(overlay)), Some(overlay));
    }
}

#[test]
fn unknown_marker_counts_as_outside() {
    assert_eq!(overlay_from_marker(""), None);
    assert_eq!(overlay_from_marker("sidebar"), None);
}
