//! Entity records shared by the profile and project views.
//!
//! DESIGN
//! ======
//! Records are plain serde values so the embedded fixture document can be
//! deserialized directly. Only `StudioProject` is ever created at runtime, and
//! only by the project-creation flow.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered user as shown on profiles and contributor lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (e.g. `"user1"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public handle including the leading `@`.
    pub handle: String,
    /// Avatar image URL.
    pub avatar_url: String,
    #[serde(default)]
    pub bio: String,
    /// Ordered genre tags shown under the bio.
    #[serde(default)]
    pub genre_tags: Vec<String>,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_contributor: bool,
    /// Whether the session user follows this user. Session-local; toggling it
    /// on a profile never writes back to the fixture.
    #[serde(default)]
    pub is_following: bool,
}

/// A credited user on a portfolio project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub user_id: String,
    pub role: String,
}

/// A finished, published piece shown on a user's profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub cover_image_url: String,
    pub likes: u32,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Credited users in display order.
    pub credits: Vec<Credit>,
}

impl PortfolioProject {
    /// True when `user_id` is among the credited users.
    pub fn credits_user(&self, user_id: &str) -> bool {
        self.credits.iter().any(|c| c.user_id == user_id)
    }
}

/// Lifecycle stage of a studio project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Mixing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [Self::Planning, Self::InProgress, Self::Mixing, Self::Completed];

    /// Stable identifier used for form values.
    pub fn id(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Mixing => "mixing",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Mixing => "Mixing",
            Self::Completed => "Completed",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// A user attached to a studio project under a role label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub user: User,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectMessage {
    pub id: String,
    pub author_id: String,
    pub body: String,
    pub sent_at: i64,
}

/// A collaborative work-in-progress project listed on the projects page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudioProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// At most five unique tags, in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_public: bool,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Contributors in display order. Never empty for projects created here.
    pub contributors: Vec<Contributor>,
    /// Last update timestamp in milliseconds since the Unix epoch.
    pub last_updated_at: i64,
    /// Completion percentage, `0..=100`.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub tasks: Vec<ProjectTask>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
    #[serde(default)]
    pub messages: Vec<ProjectMessage>,
}

impl StudioProject {
    pub fn has_contributor(&self, user_id: &str) -> bool {
        self.contributors.iter().any(|c| c.user.id == user_id)
    }
}

/// A user-curated playlist shown on the profile playlists tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub track_count: u32,
    /// Total running time in seconds.
    pub duration_secs: u32,
    pub cover_image_url: String,
    pub is_public: bool,
    pub created_at: i64,
}

/// Track metadata embedded in a liked-track entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Length in seconds, when known.
    #[serde(default)]
    pub duration_secs: Option<u32>,
    pub album_art_url: String,
}

/// A track the user liked, with a pointer back to the post it came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LikedTrack {
    pub id: String,
    /// User who liked the track.
    pub liked_by: String,
    pub track: Track,
    /// Human-readable relative time (e.g. `"3 days ago"`).
    pub liked_at: String,
    /// Author of the post the track was liked from.
    pub post_author_id: String,
    pub post_likes: u32,
}

/// Headline numbers for the profile about tab.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub uploaded_tracks: u32,
    pub total_plays: u64,
    /// Average rating on a five-point scale.
    pub average_rating: f32,
    pub votes_received: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    #[default]
    Trophy,
    Star,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub title: String,
    pub detail: String,
}

/// Extra profile details for the about tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileAbout {
    pub user_id: String,
    pub joined_at: i64,
    #[serde(default)]
    pub stats: ActivityStats,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}
