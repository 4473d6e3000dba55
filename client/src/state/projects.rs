//! Project repository: the store the project pages read from and write to.
//!
//! DESIGN
//! ======
//! Pages depend on the `ProjectRepository` trait rather than on a concrete
//! store. The in-memory implementation is seeded from an embedded JSON file
//! and lives for as long as the browser tab; nothing is persisted.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::project::Project;

const SEED_PROJECTS: &str = include_str!("seed_projects.json");

/// Lookup and write access to projects.
pub trait ProjectRepository {
    fn find_by_id(&self, id: u64) -> Option<Project>;

    /// Insert `project`, replacing any project with the same id.
    fn upsert(&mut self, project: Project);

    /// Remove the project with `id`, returning it if it existed.
    fn remove(&mut self, id: u64) -> Option<Project>;

    fn list(&self) -> Vec<Project>;
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("invalid project id: {0:?}")]
    InvalidId(String),
    #[error("project not found: {0}")]
    NotFound(u64),
}

/// Resolve a route-supplied id against `repo`.
///
/// # Errors
///
/// Returns `InvalidId` when `raw_id` is not a number and `NotFound` when no
/// project has that id.
pub fn load_project(repo: &impl ProjectRepository, raw_id: &str) -> Result<Project, ProjectError> {
    let id: u64 = raw_id
        .trim()
        .parse()
        .map_err(|_| ProjectError::InvalidId(raw_id.to_owned()))?;
    repo.find_by_id(id).ok_or(ProjectError::NotFound(id))
}

/// Vec-backed repository keeping projects in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryProjectRepository {
    projects: Vec<Project>,
}

impl InMemoryProjectRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Repository holding the bundled sample projects.
    pub fn seeded() -> Self {
        match serde_json::from_str::<Vec<Project>>(SEED_PROJECTS) {
            Ok(projects) => Self::new(projects),
            Err(e) => {
                log::error!("failed to parse seed projects: {e}");
                Self::default()
            }
        }
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn find_by_id(&self, id: u64) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    fn upsert(&mut self, project: Project) {
        if let Some(existing) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            self.projects.push(project);
        }
    }

    fn remove(&mut self, id: u64) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    fn list(&self) -> Vec<Project> {
        self.projects.clone()
    }
}
