//! Viewer membership on a project: the joined and owner flags plus the team roster.
//!
//! DESIGN
//! ======
//! Ownership starts from the stored `Project::owner`. The page persists
//! changes to it; this struct only tracks the viewer's local flags.

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

use super::project::Project;

/// Viewer's relationship to the project: joined, owner, and the team roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipState {
    pub is_joined: bool,
    pub is_owner: bool,
    pub team_members: Vec<String>,
}

impl MembershipState {
    /// Initial membership for `viewer` looking at `project`.
    pub fn for_viewer(project: &Project, viewer: &str) -> Self {
        Self { is_joined: false, is_owner: project.is_owned_by(viewer), team_members: Vec::new() }
    }

    /// Join the project team as `member`.
    ///
    /// A member who joins is not the owner. Returns `false` when already
    /// joined; the roster is left untouched in that case.
    pub fn join(&mut self, member: &str) -> bool {
        if self.is_joined {
            return false;
        }
        self.is_joined = true;
        self.is_owner = false;
        self.team_members.push(member.to_owned());
        true
    }

    /// Claim ownership. Returns `false` when already the owner.
    pub fn become_owner(&mut self) -> bool {
        if self.is_owner {
            return false;
        }
        self.is_owner = true;
        true
    }
}
