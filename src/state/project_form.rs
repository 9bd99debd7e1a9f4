//! Controlled state for the start-project modal.
//!
//! DESIGN
//! ======
//! The form is always editable. A successful `submit` hands back a
//! [`ProjectDraft`] and resets every field, so the next open starts clean.
//! A failed `submit` changes nothing. Cancelling is just `reset`.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

use crate::data::types::ProjectStatus;
use crate::state::tags::TagSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Project title is required.")]
    TitleRequired,
}

/// Validated user input for a new project, before ids and timestamps exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub status: ProjectStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tags: TagSet,
    /// Pending text in the tag input, not yet committed.
    pub tag_input: String,
    /// Private by default.
    pub is_public: bool,
    pub status: ProjectStatus,
}

impl ProjectForm {
    /// Commit the pending tag input. Does nothing when the input is empty;
    /// otherwise the input is cleared whether or not the tag was accepted.
    /// Returns whether a tag was added.
    pub fn commit_tag_input(&mut self) -> bool {
        if self.tag_input.is_empty() {
            return false;
        }
        let added = self.tags.add(&self.tag_input);
        self.tag_input.clear();
        added
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        Ok(())
    }

    /// Validate and, on success, take the field values and reset the form.
    pub fn submit(&mut self) -> Result<ProjectDraft, FormError> {
        self.validate()?;
        let form = std::mem::take(self);
        Ok(ProjectDraft {
            title: form.title.trim().to_owned(),
            description: form.description,
            tags: form.tags.into_vec(),
            is_public: form.is_public,
            status: form.status,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
