//! Read-only sample data provider injected into the view layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. The app root loads one `SampleFixtures` value at
//! startup and hands it to pages through context as a [`SharedFixtures`]
//! handle. Views read from it and never mutate it; anything a page changes
//! (created projects, follow toggles) lives in page-owned state.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use super::types::{
    Contributor, Credit, LikedTrack, Playlist, PortfolioProject, ProfileAbout, ProjectFile, ProjectMessage,
    ProjectStatus, ProjectTask, StudioProject, User,
};

const EMBEDDED_FIXTURES: &str = include_str!("fixtures.json");

/// Source of all sample records the views display.
pub trait FixtureSource: Send + Sync {
    fn users(&self) -> &[User];

    fn portfolio_projects(&self) -> &[PortfolioProject];

    /// Initial contents of the projects page collection.
    fn studio_projects(&self) -> &[StudioProject];

    /// Playlists owned by `user_id`, in fixture order.
    fn playlists_for(&self, user_id: &str) -> Vec<Playlist>;

    /// Tracks liked by `user_id`, most recent first.
    fn liked_tracks_for(&self, user_id: &str) -> Vec<LikedTrack>;

    fn profile_about(&self, user_id: &str) -> Option<ProfileAbout>;

    fn user(&self, id: &str) -> Option<&User> {
        self.users().iter().find(|u| u.id == id)
    }
}

/// Shared handle placed in context by the app root.
pub type SharedFixtures = Arc<dyn FixtureSource>;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("malformed fixture document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate user id: {0}")]
    DuplicateUser(String),
    #[error("{context} references unknown user: {user_id}")]
    UnknownUser { context: String, user_id: String },
}

/// Studio project as stored in the document, with contributors by user id.
#[derive(Deserialize)]
struct StudioProjectRecord {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    is_public: bool,
    #[serde(default)]
    status: ProjectStatus,
    contributors: Vec<Credit>,
    last_updated_at: i64,
    #[serde(default)]
    progress: u8,
    #[serde(default)]
    tasks: Vec<ProjectTask>,
    #[serde(default)]
    files: Vec<ProjectFile>,
    #[serde(default)]
    messages: Vec<ProjectMessage>,
}

#[derive(Deserialize)]
struct FixtureDocument {
    users: Vec<User>,
    #[serde(default)]
    portfolio_projects: Vec<PortfolioProject>,
    #[serde(default)]
    studio_projects: Vec<StudioProjectRecord>,
    #[serde(default)]
    playlists: Vec<Playlist>,
    #[serde(default)]
    liked_tracks: Vec<LikedTrack>,
    #[serde(default)]
    profiles: Vec<ProfileAbout>,
}

/// In-memory fixture set parsed from a JSON document.
#[derive(Clone, Debug, Default)]
pub struct SampleFixtures {
    users: Vec<User>,
    portfolio_projects: Vec<PortfolioProject>,
    studio_projects: Vec<StudioProject>,
    playlists: Vec<Playlist>,
    liked_tracks: Vec<LikedTrack>,
    profiles: Vec<ProfileAbout>,
}

impl SampleFixtures {
    /// Parse the fixture document compiled into the crate.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    /// Parse and validate a fixture document.
    ///
    /// Every user reference (credits, contributors, liked-track authors,
    /// playlist owners) must name a user in the document.
    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let doc: FixtureDocument = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for user in &doc.users {
            if !seen.insert(user.id.as_str()) {
                return Err(FixtureError::DuplicateUser(user.id.clone()));
            }
        }
        let lookup = |context: &str, user_id: &str| -> Result<User, FixtureError> {
            doc.users
                .iter()
                .find(|u| u.id == user_id)
                .cloned()
                .ok_or_else(|| FixtureError::UnknownUser { context: context.to_owned(), user_id: user_id.to_owned() })
        };

        for project in &doc.portfolio_projects {
            for credit in &project.credits {
                lookup(&format!("portfolio project {}", project.id), &credit.user_id)?;
            }
        }
        for playlist in &doc.playlists {
            lookup(&format!("playlist {}", playlist.id), &playlist.owner_id)?;
        }
        for liked in &doc.liked_tracks {
            let context = format!("liked track {}", liked.id);
            lookup(&context, &liked.liked_by)?;
            lookup(&context, &liked.post_author_id)?;
        }
        for about in &doc.profiles {
            lookup("profile details", &about.user_id)?;
        }

        let mut studio_projects = Vec::with_capacity(doc.studio_projects.len());
        for record in doc.studio_projects {
            let context = format!("studio project {}", record.id);
            let contributors = record
                .contributors
                .iter()
                .map(|c| Ok(Contributor { user: lookup(&context, &c.user_id)?, role: c.role.clone() }))
                .collect::<Result<Vec<_>, FixtureError>>()?;
            studio_projects.push(StudioProject {
                id: record.id,
                title: record.title,
                description: record.description,
                tags: record.tags,
                is_public: record.is_public,
                status: record.status,
                contributors,
                last_updated_at: record.last_updated_at,
                progress: record.progress.min(100),
                tasks: record.tasks,
                files: record.files,
                messages: record.messages,
            });
        }

        Ok(Self {
            users: doc.users,
            portfolio_projects: doc.portfolio_projects,
            studio_projects,
            playlists: doc.playlists,
            liked_tracks: doc.liked_tracks,
            profiles: doc.profiles,
        })
    }

    /// Wrap into the shared handle used by context.
    pub fn shared(self) -> SharedFixtures {
        Arc::new(self)
    }
}

impl FixtureSource for SampleFixtures {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn portfolio_projects(&self) -> &[PortfolioProject] {
        &self.portfolio_projects
    }

    fn studio_projects(&self) -> &[StudioProject] {
        &self.studio_projects
    }

    fn playlists_for(&self, user_id: &str) -> Vec<Playlist> {
        self.playlists
            .iter()
            .filter(|p| p.owner_id == user_id)
            .cloned()
            .collect()
    }

    fn liked_tracks_for(&self, user_id: &str) -> Vec<LikedTrack> {
        self.liked_tracks
            .iter()
            .filter(|t| t.liked_by == user_id)
            .cloned()
            .collect()
    }

    fn profile_about(&self, user_id: &str) -> Option<ProfileAbout> {
        self.profiles.iter().find(|p| p.user_id == user_id).cloned()
    }
}
