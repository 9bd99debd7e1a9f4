//! Profile view model: who is being viewed, what they made, and whether it
//! is the session user's own profile.
//!
//! DESIGN
//! ======
//! `resolve_user` reports a missing id as `None`. The profile page keeps the
//! permissive behavior of showing the session user for unknown ids, but the
//! fallback happens in `ProfileViewModel::build`, is flagged on the model and
//! logged, rather than hidden inside the lookup.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::data::fixtures::FixtureSource;
use crate::data::types::{PortfolioProject, User};
use crate::state::session::SessionState;
use crate::state::tabs::{ProfileTab, TabState};

/// Look up a user by id.
pub fn resolve_user(fixtures: &dyn FixtureSource, user_id: &str) -> Option<User> {
    fixtures.user(user_id).cloned()
}

/// Portfolio projects crediting `user_id`, in fixture order.
pub fn user_projects(fixtures: &dyn FixtureSource, user_id: &str) -> Vec<PortfolioProject> {
    fixtures
        .portfolio_projects()
        .iter()
        .filter(|p| p.credits_user(user_id))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileViewModel {
    /// Route id this model was built for. May differ from `user.id` after a
    /// fallback.
    pub requested_id: String,
    /// Profile being displayed.
    pub user: User,
    /// Portfolio projects crediting the requested id.
    pub projects: Vec<PortfolioProject>,
    pub is_own_profile: bool,
    /// True when the requested id was unknown and the session user is shown.
    pub fell_back: bool,
    /// Session-local follow toggle, seeded from the fixture.
    pub is_following: bool,
    pub tabs: TabState<ProfileTab>,
}

impl ProfileViewModel {
    pub fn build(fixtures: &dyn FixtureSource, requested_id: &str, session: &SessionState) -> Self {
        let (user, fell_back) = match resolve_user(fixtures, requested_id) {
            Some(user) => (user, false),
            None => {
                leptos::logging::warn!(
                    "profile {requested_id} not found; showing session user {}",
                    session.current_user_id()
                );
                (session.current_user.clone(), true)
            }
        };
        let projects = user_projects(fixtures, requested_id);
        let is_own_profile = session.is_current(&user.id);
        let is_following = user.is_following;
        Self {
            requested_id: requested_id.to_owned(),
            user,
            projects,
            is_own_profile,
            fell_back,
            is_following,
            tabs: TabState::default(),
        }
    }

    /// Whether the route now targets a different id than this model was
    /// built for. Compares requested ids, never the resolved user.
    pub fn needs_rebuild(&self, requested_id: &str) -> bool {
        self.requested_id != requested_id
    }

    /// Count shown in the header's projects stat.
    pub fn projects_count(&self) -> usize {
        self.projects.len()
    }

    /// Flip the follow button. Has no effect on the viewer's own profile.
    pub fn toggle_follow(&mut self) {
        if !self.is_own_profile {
            self.is_following = !self.is_following;
        }
    }

    pub fn follow_label(&self) -> &'static str {
        if self.is_following { "Following" } else { "Follow" }
    }

    pub fn account_status_label(&self) -> &'static str {
        if self.user.is_contributor { "Contributor" } else { "Member" }
    }
}
