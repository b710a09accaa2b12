use super::*;

#[test]
fn shell_defaults() {
    let shell = ShellState::default();
    assert_eq!(shell.page_title, "Products");
    assert_eq!(shell.overlays().active(), None);
    assert!(!shell.sidebar_open());
    assert_eq!(shell.drawer(), None);
}

#[test]
fn opening_sidebar_closes_overlays() {
    let mut shell = ShellState::default();
    shell.toggle_overlay(Overlay::ProfileMenu);
    shell.toggle_sidebar();
    assert!(shell.sidebar_open());
    assert_eq!(shell.overlays().active(), None);
}

#[test]
fn opening_overlay_closes_sidebar() {
    let mut shell = ShellState::default();
    shell.toggle_sidebar();
    shell.toggle_overlay(Overlay::NotificationPanel);
    assert!(!shell.sidebar_open());
    assert!(shell.is_open(Overlay::NotificationPanel));
}

#[test]
fn closing_overlay_leaves_sidebar_alone() {
    let mut shell = ShellState::default();
    shell.toggle_overlay(Overlay::NotificationPanel);
    shell.toggle_overlay(Overlay::NotificationPanel);
    shell.toggle_sidebar();
    assert!(shell.sidebar_open());
}

#[test]
fn navigate_closes_sidebar_and_sets_title() {
    let mut shell = ShellState::default();
    shell.toggle_sidebar();
    shell.navigate("Settings");
    assert!(!shell.sidebar_open());
    assert_eq!(shell.page_title, "Settings");
}

#[test]
fn view_all_notifications_moves_to_drawer() {
    let mut shell = ShellState::default();
    shell.toggle_overlay(Overlay::NotificationPanel);
    shell.open_drawer(Drawer::Notifications);
    assert_eq!(shell.overlays().active(), None);
    assert_eq!(shell.drawer(), Some(Drawer::Notifications));
    shell.close_drawer();
    assert_eq!(shell.drawer(), None);
}

#[test]
fn modal_open_closes_overlays_and_sidebar() {
    let mut shell = ShellState::default();
    shell.toggle_overlay(Overlay::ProfileMenu);
    shell.modal_opened();
    assert_eq!(shell.overlays().active(), None);
    assert!(!shell.sidebar_open());
}

#[test]
fn profile_action_closes_menu_first() {
    let mut shell = ShellState::default();
    shell.toggle_overlay(Overlay::ProfileMenu);
    let action = shell.choose_profile_action(ProfileAction::Settings);
    assert_eq!(action, ProfileAction::Settings);
    assert!(!shell.is_open(Overlay::ProfileMenu));
}

#[test]
fn profile_actions_route_except_logout() {
    assert_eq!(ProfileAction::Profile.route(), Some("/app/profile"));
    assert_eq!(ProfileAction::Settings.route(), Some("/app/settings"));
    assert_eq!(ProfileAction::Logout.route(), None);
    let labels: Vec<_> = ProfileAction::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(labels, ["Profile", "Settings", "Logout"]);
}
