//! Owner-only settings modal and its draft.
//!
//! DESIGN
//! ======
//! Edits go to a `ProjectDraft`; the live project only changes when the draft
//! is saved. Cancelling drops the draft.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use super::project::Project;

/// Edit-in-progress copy of the owner-editable project fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub disciplines: Vec<String>,
    pub invited_users: Vec<String>,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            is_public: project.is_public,
            disciplines: project.disciplines.clone(),
            invited_users: project.invited_users.clone(),
        }
    }

    /// Add a discipline. Blank and duplicate values are ignored.
    pub fn add_discipline(&mut self, discipline: &str) -> bool {
        push_unique(&mut self.disciplines, discipline)
    }

    pub fn remove_discipline(&mut self, discipline: &str) {
        self.disciplines.retain(|d| d != discipline);
    }

    /// Invite a user by name. Blank and duplicate values are ignored.
    pub fn invite_user(&mut self, user: &str) -> bool {
        push_unique(&mut self.invited_users, user)
    }

    pub fn remove_invited_user(&mut self, user: &str) {
        self.invited_users.retain(|u| u != user);
    }

    /// Copy every draft field over `project`.
    pub fn apply_to(&self, project: &Project) -> Project {
        Project {
            title: self.title.clone(),
            description: self.description.clone(),
            is_public: self.is_public,
            disciplines: self.disciplines.clone(),
            invited_users: self.invited_users.clone(),
            ..project.clone()
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_owned());
    true
}

/// Settings modal: open while a draft exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsModalState {
    draft: Option<ProjectDraft>,
}

impl SettingsModalState {
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&ProjectDraft> {
        self.draft.as_ref()
    }

    /// Open the modal with a fresh draft of `project`.
    pub fn open(&mut self, project: &Project) {
        self.draft = Some(ProjectDraft::from_project(project));
    }

    /// Apply `edit` to the open draft. Does nothing while closed.
    pub fn edit(&mut self, edit: impl FnOnce(&mut ProjectDraft)) {
        if let Some(draft) = self.draft.as_mut() {
            edit(draft);
        }
    }

    /// Close the modal and return `project` with the draft merged over it.
    ///
    /// Returns `None` when the modal was not open.
    pub fn save(&mut self, project: &Project) -> Option<Project> {
        self.draft.take().map(|draft| draft.apply_to(project))
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}
