//! Session identity for the mock signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no authentication. The session user is picked once at startup
//! from configuration and the fixtures, and identity checks are plain id
//! comparisons.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::data::fixtures::FixtureSource;
use crate::data::types::User;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub current_user: User,
}

impl SessionState {
    /// Pick the session user: `preferred_id` when it exists in the fixtures,
    /// else the first fixture user, else a local guest.
    pub fn select(fixtures: &dyn FixtureSource, preferred_id: &str) -> Self {
        if let Some(user) = fixtures.user(preferred_id) {
            return Self { current_user: user.clone() };
        }
        let fallback = fixtures.users().first().cloned().unwrap_or_else(guest_user);
        leptos::logging::warn!(
            "session user {preferred_id} not in fixtures; using {}",
            fallback.id
        );
        Self { current_user: fallback }
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user.id
    }

    /// Whether `user_id` is the session user. Pure id equality.
    pub fn is_current(&self, user_id: &str) -> bool {
        self.current_user.id == user_id
    }
}

fn guest_user() -> User {
    User {
        id: "guest".to_owned(),
        name: "Guest".to_owned(),
        handle: "@guest".to_owned(),
        avatar_url: String::new(),
        bio: String::new(),
        genre_tags: Vec::new(),
        followers_count: 0,
        following_count: 0,
        is_online: true,
        is_contributor: false,
        is_following: false,
    }
}
