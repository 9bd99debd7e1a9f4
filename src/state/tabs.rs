//! Tab selection for the profile and project-listing views.
//!
//! DESIGN
//! ======
//! Tabs are closed enums, so an invalid selection cannot be represented.
//! The `?tab=` query on the profile and projects routes goes through
//! `set_active_id`, which ignores anything `from_id` does not recognize.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// A closed set of tab identifiers with stable ids and display labels.
pub trait Tab: Copy + Default + PartialEq + Eq + 'static {
    /// Every tab in display order.
    const ALL: &'static [Self];

    fn id(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }
}

/// Tabs on a user profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Projects,
    Playlists,
    Liked,
    About,
}

impl Tab for ProfileTab {
    const ALL: &'static [Self] = &[Self::Projects, Self::Playlists, Self::Liked, Self::About];

    fn id(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Playlists => "playlists",
            Self::Liked => "liked",
            Self::About => "about",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Playlists => "Playlists",
            Self::Liked => "Liked",
            Self::About => "About",
        }
    }
}

/// Tabs on the project listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectTab {
    #[default]
    All,
    My,
    Team,
    Public,
}

impl Tab for ProjectTab {
    const ALL: &'static [Self] = &[Self::All, Self::My, Self::Team, Self::Public];

    fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::My => "my",
            Self::Team => "team",
            Self::Public => "public",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::My => "My Projects",
            Self::Team => "Team Projects",
            Self::Public => "Public Workshop",
        }
    }
}

/// Holds the single active tab for a view. Starts on the default tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabState<T: Tab> {
    active: T,
}

impl<T: Tab> TabState<T> {
    pub fn active(&self) -> T {
        self.active
    }

    pub fn set_active(&mut self, tab: T) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Switch by string id. Unknown ids leave the selection unchanged and
    /// return `false`.
    pub fn set_active_id(&mut self, id: &str) -> bool {
        match T::from_id(id) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }
}
