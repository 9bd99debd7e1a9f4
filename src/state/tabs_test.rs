use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn profile_tab_default_is_projects() {
    assert_eq!(ProfileTab::default(), ProfileTab::Projects);
    assert_eq!(TabState::<ProfileTab>::default().active(), ProfileTab::Projects);
}

#[test]
fn project_tab_default_is_all() {
    assert_eq!(ProjectTab::default(), ProjectTab::All);
    assert_eq!(TabState::<ProjectTab>::default().active(), ProjectTab::All);
}

// =============================================================
// Ids and labels
// =============================================================

#[test]
fn tab_ids_round_trip_through_from_id() {
    for tab in ProfileTab::ALL {
        assert_eq!(ProfileTab::from_id(tab.id()), Some(*tab));
    }
    for tab in ProjectTab::ALL {
        assert_eq!(ProjectTab::from_id(tab.id()), Some(*tab));
    }
}

#[test]
fn unknown_tab_id_is_rejected() {
    assert_eq!(ProjectTab::from_id("archived"), None);
    assert_eq!(ProfileTab::from_id(""), None);
    assert_eq!(ProjectTab::from_id("All"), None);
}

#[test]
fn project_tab_labels_match_listing_headers() {
    let labels: Vec<_> = ProjectTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["All Projects", "My Projects", "Team Projects", "Public Workshop"]);
}

#[test]
fn profile_tabs_in_display_order() {
    assert_eq!(
        ProfileTab::ALL,
        &[ProfileTab::Projects, ProfileTab::Playlists, ProfileTab::Liked, ProfileTab::About]
    );
}

// =============================================================
// TabState
// =============================================================

#[test]
fn set_active_replaces_selection() {
    let mut tabs = TabState::<ProjectTab>::default();
    tabs.set_active(ProjectTab::Public);
    assert_eq!(tabs.active(), ProjectTab::Public);
    assert!(tabs.is_active(ProjectTab::Public));
    assert!(!tabs.is_active(ProjectTab::All));
}

#[test]
fn set_active_id_accepts_known_ids() {
    let mut tabs = TabState::<ProfileTab>::default();
    assert!(tabs.set_active_id("liked"));
    assert_eq!(tabs.active(), ProfileTab::Liked);
}

#[test]
fn set_active_id_ignores_unknown_ids() {
    let mut tabs = TabState::<ProfileTab>::default();
    tabs.set_active(ProfileTab::About);
    assert!(!tabs.set_active_id("settings"));
    assert_eq!(tabs.active(), ProfileTab::About);
}
