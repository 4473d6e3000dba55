//! Project records as stored in the repository.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use serde::{Deserialize, Serialize};

/// A collaborative creative project as stored in the project repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub invited_users: Vec<String>,
    /// Name of the viewer who owns the project, if any.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub deadlines: Vec<Deadline>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

/// A named unit of project progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub label: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

impl Project {
    /// Image shown in the page header: the cover image when set, else the card image.
    pub fn header_image(&self) -> &str {
        self.cover_image
            .as_deref()
            .filter(|src| !src.is_empty())
            .unwrap_or(&self.image)
    }

    /// Percentage of completed milestones in `0.0..=100.0`.
    ///
    /// A project without milestones reports zero progress.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(&self.milestones)
    }

    pub fn is_owned_by(&self, viewer: &str) -> bool {
        self.owner.as_deref() == Some(viewer)
    }
}

/// Completed / total milestones as a percentage.
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(milestones: &[Milestone]) -> f64 {
    if milestones.is_empty() {
        return 0.0;
    }
    let completed = milestones.iter().filter(|m| m.completed).count();
    completed as f64 / milestones.len() as f64 * 100.0
}

/// Placeholder audio track shown in the contributions audio tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub user_id: u64,
    pub user_name: String,
    pub audio_url: String,
    pub volume: f32,
    pub is_muted: bool,
}

/// Static track list for the audio tab. Nothing mutates these.
pub fn placeholder_tracks() -> Vec<Track> {
    vec![
        Track {
            id: 1,
            user_id: 1,
            user_name: "User1".to_owned(),
            audio_url: String::new(),
            volume: 1.0,
            is_muted: false,
        },
        Track {
            id: 2,
            user_id: 2,
            user_name: "User2".to_owned(),
            audio_url: String::new(),
            volume: 0.8,
            is_muted: false,
        },
        Track {
            id: 3,
            user_id: 3,
            user_name: "User3".to_owned(),
            audio_url: String::new(),
            volume: 0.5,
            is_muted: true,
        },
    ]
}
