//! Project-listing state: the session's project collection, tab filter, and
//! the create-project flow.
//!
//! DESIGN
//! ======
//! The collection is seeded from fixtures once and owned here afterwards.
//! Filtering is a pure function of (collection, tab, session user) so the
//! page can recompute it in a memo whenever either input changes.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::data::types::{Contributor, StudioProject, User};
use crate::state::notifications::{NotificationKind, NotificationSink};
use crate::state::project_form::{ProjectDraft, ProjectForm};
use crate::state::tabs::{ProjectTab, TabState};

/// Role label given to the creator of a new project.
pub const CREATOR_ROLE: &str = "Producer";

/// Placeholder shown when the active tab matches no projects.
pub const EMPTY_TAB_MESSAGE: &str = "No projects found in this category.";

#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    /// Newest first; created projects are prepended.
    pub projects: Vec<StudioProject>,
    pub tabs: TabState<ProjectTab>,
    pub modal_open: bool,
}

impl ProjectsState {
    pub fn new(projects: Vec<StudioProject>) -> Self {
        Self { projects, ..Self::default() }
    }

    /// Look up a project by id, including ones created this session.
    pub fn find(&self, project_id: &str) -> Option<&StudioProject> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn visible(&self, current_user_id: &str) -> Vec<&StudioProject> {
        filter_projects(&self.projects, self.tabs.active(), current_user_id)
    }

    /// Build a project from `draft` and put it at the head of the collection.
    pub fn create_project(&mut self, draft: ProjectDraft, creator: &User, now_ms: i64) -> &StudioProject {
        let project = StudioProject {
            id: format!("proj-{}", uuid::Uuid::new_v4()),
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            is_public: draft.is_public,
            status: draft.status,
            contributors: vec![Contributor { user: creator.clone(), role: CREATOR_ROLE.to_owned() }],
            last_updated_at: now_ms,
            progress: 0,
            tasks: Vec::new(),
            files: Vec::new(),
            messages: Vec::new(),
        };
        self.projects.insert(0, project);
        &self.projects[0]
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Cancel path: discard form input and close.
    pub fn close_modal(&mut self, form: &mut ProjectForm) {
        form.reset();
        self.modal_open = false;
    }
}

/// Projects visible under `tab`, preserving collection order.
///
/// - `All`: everything.
/// - `My`: private projects the current user contributes to.
/// - `Team`: projects with more than one contributor.
/// - `Public`: public projects.
pub fn filter_projects<'a>(
    projects: &'a [StudioProject],
    tab: ProjectTab,
    current_user_id: &str,
) -> Vec<&'a StudioProject> {
    projects
        .iter()
        .filter(|p| matches_tab(p, tab, current_user_id))
        .collect()
}

/// Count shown in the badge next to a tab label.
pub fn tab_count(projects: &[StudioProject], tab: ProjectTab, current_user_id: &str) -> usize {
    projects
        .iter()
        .filter(|p| matches_tab(p, tab, current_user_id))
        .count()
}

fn matches_tab(project: &StudioProject, tab: ProjectTab, current_user_id: &str) -> bool {
    match tab {
        ProjectTab::All => true,
        ProjectTab::My => !project.is_public && project.has_contributor(current_user_id),
        ProjectTab::Team => project.contributors.len() > 1,
        ProjectTab::Public => project.is_public,
    }
}

/// Run the submit action of the start-project modal.
///
/// On a blank title: one error notification, nothing else changes, the modal
/// stays open. On success: the project is prepended, one success
/// notification is queued, the form is reset and the modal closes.
/// Returns whether a project was created.
pub fn submit_new_project(
    form: &mut ProjectForm,
    projects: &mut ProjectsState,
    notifications: &mut impl NotificationSink,
    creator: &User,
    now_ms: i64,
) -> bool {
    match form.submit() {
        Ok(draft) => {
            let project = projects.create_project(draft, creator, now_ms);
            leptos::logging::log!("project created: id={} public={}", project.id, project.is_public);
            let message = format!("Project \"{}\" created!", project.title);
            notifications.add_notification(NotificationKind::Success, message);
            projects.modal_open = false;
            true
        }
        Err(e) => {
            notifications.add_notification(NotificationKind::Error, e.to_string());
            false
        }
    }
}
