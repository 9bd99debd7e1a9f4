//! Typed navigation destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never build URLs or call the router directly. They emit a
//! [`Destination`] through the `Callback<Destination>` the app root provides,
//! and the root maps it onto a route path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

/// Which side of a user's follow graph to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowKind {
    Followers,
    Following,
}

impl FollowKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
        }
    }

    /// Parse the `:kind` route segment.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "followers" => Some(Self::Followers),
            "following" => Some(Self::Following),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Followers => "Followers",
            Self::Following => "Following",
        }
    }
}

/// Every place a view can send the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Projects,
    Settings,
    Profile { user_id: String },
    FollowList { user_id: String, kind: FollowKind },
    Project { project_id: String },
}

impl Destination {
    /// Route path for this destination.
    pub fn href(&self) -> String {
        match self {
            Self::Projects => "/projects".to_owned(),
            Self::Settings => "/settings".to_owned(),
            Self::Profile { user_id } => format!("/profile/{user_id}"),
            Self::FollowList { user_id, kind } => format!("/profile/{user_id}/{}", kind.id()),
            Self::Project { project_id } => format!("/projects/{project_id}"),
        }
    }
}

/// Fetch the navigation callback from context. Call during component setup,
/// not inside event handlers. Without a provider, destinations are logged
/// and dropped.
pub fn use_navigator() -> Callback<Destination> {
    use_context::<Callback<Destination>>().unwrap_or_else(|| {
        Callback::new(|destination: Destination| {
            leptos::logging::warn!("no navigator in context; dropped {}", destination.href());
        })
    })
}
