//! Identity of the person using the app.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

/// Name used for the viewer until real sign-in exists.
pub const DEFAULT_VIEWER_NAME: &str = "CurrentUser";

/// Identity of the person viewing the app.
///
/// Ownership and authorship checks compare against `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub name: String,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self { name: DEFAULT_VIEWER_NAME.to_owned() }
    }
}
