use super::*;
use crate::data::types::ProjectStatus;
use crate::state::notifications::NotificationState;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: format!("User {id}"),
        handle: format!("@{id}"),
        avatar_url: String::new(),
        bio: String::new(),
        genre_tags: Vec::new(),
        followers_count: 0,
        following_count: 0,
        is_online: false,
        is_contributor: false,
        is_following: false,
    }
}

fn project(id: &str, is_public: bool, contributor_ids: &[&str]) -> StudioProject {
    StudioProject {
        id: id.to_owned(),
        title: id.to_uppercase(),
        description: String::new(),
        tags: Vec::new(),
        is_public,
        status: ProjectStatus::Planning,
        contributors: contributor_ids
            .iter()
            .map(|uid| Contributor { user: user(uid), role: "Producer".to_owned() })
            .collect(),
        last_updated_at: 0,
        progress: 0,
        tasks: Vec::new(),
        files: Vec::new(),
        messages: Vec::new(),
    }
}

fn ids(projects: &[&StudioProject]) -> Vec<String> {
    projects.iter().map(|p| p.id.clone()).collect()
}

/// P1 public (user3), P2 private (user1), P3 private (user2).
fn scenario() -> Vec<StudioProject> {
    vec![
        project("p1", true, &["user3"]),
        project("p2", false, &["user1"]),
        project("p3", false, &["user2"]),
    ]
}

// =============================================================
// filter_projects
// =============================================================

#[test]
fn all_tab_is_identity_in_order() {
    let projects = scenario();
    let visible = filter_projects(&projects, ProjectTab::All, "user1");
    assert_eq!(ids(&visible), ["p1", "p2", "p3"]);
}

#[test]
fn my_tab_is_private_projects_of_current_user() {
    let projects = scenario();
    assert_eq!(ids(&filter_projects(&projects, ProjectTab::My, "user1")), ["p2"]);
}

#[test]
fn my_tab_excludes_public_projects_even_when_contributing() {
    let projects = vec![project("p1", true, &["user1"]), project("p2", false, &["user1", "user2"])];
    assert_eq!(ids(&filter_projects(&projects, ProjectTab::My, "user1")), ["p2"]);
}

#[test]
fn team_tab_empty_when_all_single_contributor() {
    let projects = scenario();
    assert!(filter_projects(&projects, ProjectTab::Team, "user1").is_empty());
}

#[test]
fn team_tab_keeps_multi_contributor_projects() {
    let projects = vec![
        project("solo", true, &["user1"]),
        project("duo", false, &["user1", "user2"]),
        project("trio", true, &["user2", "user3", "user4"]),
    ];
    assert_eq!(ids(&filter_projects(&projects, ProjectTab::Team, "user9")), ["duo", "trio"]);
}

#[test]
fn public_tab_is_public_subset_in_order() {
    let projects = vec![
        project("a", true, &["user1"]),
        project("b", false, &["user1"]),
        project("c", true, &["user2"]),
        project("d", false, &["user3"]),
    ];
    let visible = filter_projects(&projects, ProjectTab::Public, "user1");
    assert_eq!(ids(&visible), ["a", "c"]);
    assert!(visible.iter().all(|p| p.is_public));
}

#[test]
fn scenario_public_tab_yields_p1() {
    let projects = scenario();
    assert_eq!(ids(&filter_projects(&projects, ProjectTab::Public, "user1")), ["p1"]);
}

#[test]
fn filter_on_empty_collection_is_empty() {
    for tab in [ProjectTab::All, ProjectTab::My, ProjectTab::Team, ProjectTab::Public] {
        assert!(filter_projects(&[], tab, "user1").is_empty());
    }
}

#[test]
fn tab_count_matches_filter_length() {
    let projects = scenario();
    for tab in [ProjectTab::All, ProjectTab::My, ProjectTab::Team, ProjectTab::Public] {
        assert_eq!(tab_count(&projects, tab, "user1"), filter_projects(&projects, tab, "user1").len());
    }
}

#[test]
fn visible_uses_active_tab() {
    let mut state = ProjectsState::new(scenario());
    assert_eq!(state.visible("user1").len(), 3);
    state.tabs.set_active(ProjectTab::My);
    assert_eq!(ids(&state.visible("user1")), ["p2"]);
}

// =============================================================
// create_project
// =============================================================

#[test]
fn create_project_prepends_with_creator_as_producer() {
    let mut state = ProjectsState::new(scenario());
    let draft = ProjectDraft {
        title: "New Track".to_owned(),
        description: "desc".to_owned(),
        tags: vec!["lofi".to_owned()],
        is_public: false,
        status: ProjectStatus::Planning,
    };
    let created = state.create_project(draft, &user("user1"), 1_700_000_000_000).clone();

    assert_eq!(state.projects.len(), 4);
    assert_eq!(state.projects[0], created);
    assert!(created.id.starts_with("proj-"));
    assert_eq!(created.contributors.len(), 1);
    assert_eq!(created.contributors[0].user.id, "user1");
    assert_eq!(created.contributors[0].role, CREATOR_ROLE);
    assert_eq!(created.progress, 0);
    assert_eq!(created.last_updated_at, 1_700_000_000_000);
    assert!(created.tasks.is_empty());
    assert!(created.files.is_empty());
    assert!(created.messages.is_empty());
    assert_eq!(state.projects[1].id, "p1");
}

#[test]
fn created_ids_are_unique() {
    let mut state = ProjectsState::default();
    let draft = ProjectDraft {
        title: "T".to_owned(),
        description: String::new(),
        tags: Vec::new(),
        is_public: true,
        status: ProjectStatus::Planning,
    };
    let a = state.create_project(draft.clone(), &user("user1"), 5).id.clone();
    let b = state.create_project(draft, &user("user1"), 5).id.clone();
    assert_ne!(a, b);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn close_modal_resets_form() {
    let mut state = ProjectsState::default();
    state.open_modal();
    let mut form = ProjectForm { title: "draft".to_owned(), ..ProjectForm::default() };
    form.tags.add("x");
    state.close_modal(&mut form);
    assert!(!state.modal_open);
    assert_eq!(form, ProjectForm::default());
}

// =============================================================
// submit_new_project
// =============================================================

#[test]
fn submit_with_blank_title_reports_one_error_and_changes_nothing() {
    let mut state = ProjectsState::new(scenario());
    state.open_modal();
    let before = state.projects.clone();
    let mut notifications = NotificationState::default();

    for title in ["", "   "] {
        let mut form = ProjectForm { title: title.to_owned(), description: "keep".to_owned(), ..ProjectForm::default() };
        let mut notes = NotificationState::default();
        assert!(!submit_new_project(&mut form, &mut state, &mut notes, &user("user1"), 1));
        assert_eq!(notes.items.len(), 1);
        assert_eq!(notes.items[0].kind, NotificationKind::Error);
        assert_eq!(notes.items[0].message, "Project title is required.");
        assert_eq!(form.description, "keep");
        notifications.items.extend(notes.items);
    }

    assert_eq!(state.projects, before);
    assert!(state.modal_open);
    assert!(notifications.items.iter().all(|n| n.kind == NotificationKind::Error));
    assert_eq!(notifications.items.len(), 2);
}

#[test]
fn submit_with_valid_title_prepends_notifies_resets_and_closes() {
    let mut state = ProjectsState::new(scenario());
    state.open_modal();
    let mut notifications = NotificationState::default();
    let mut form = ProjectForm { title: "Lofi Chillhop Track".to_owned(), is_public: true, ..ProjectForm::default() };
    form.tags.add("lofi");

    assert!(submit_new_project(&mut form, &mut state, &mut notifications, &user("user1"), 42));

    assert_eq!(state.projects.len(), 4);
    let head = &state.projects[0];
    assert_eq!(head.title, "Lofi Chillhop Track");
    assert_eq!(head.tags, vec!["lofi".to_owned()]);
    assert!(head.is_public);
    assert_eq!(head.contributors.len(), 1);
    assert_eq!(head.contributors[0].role, "Producer");
    assert_eq!(head.progress, 0);
    assert!(head.tasks.is_empty() && head.files.is_empty() && head.messages.is_empty());

    assert_eq!(notifications.items.len(), 1);
    assert_eq!(notifications.items[0].kind, NotificationKind::Success);
    assert_eq!(notifications.items[0].message, "Project \"Lofi Chillhop Track\" created!");

    assert_eq!(form, ProjectForm::default());
    assert!(!state.modal_open);
}

#[test]
fn created_private_project_shows_on_my_tab() {
    let mut state = ProjectsState::new(scenario());
    let mut notifications = NotificationState::default();
    let mut form = ProjectForm { title: "Secret".to_owned(), ..ProjectForm::default() };
    submit_new_project(&mut form, &mut state, &mut notifications, &user("user1"), 0);

    let mine = filter_projects(&state.projects, ProjectTab::My, "user1");
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].title, "Secret");
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_returns_seeded_and_created_projects() {
    let mut state = ProjectsState::new(scenario());
    assert_eq!(state.find("p2").map(|p| p.is_public), Some(false));

    let draft = ProjectDraft {
        title: "Fresh".to_owned(),
        description: String::new(),
        tags: Vec::new(),
        is_public: true,
        status: ProjectStatus::Planning,
    };
    let id = state.create_project(draft, &user("user1"), 7).id.clone();
    assert_eq!(state.find(&id).map(|p| p.title.as_str()), Some("Fresh"));
    assert!(state.find("missing").is_none());
}
