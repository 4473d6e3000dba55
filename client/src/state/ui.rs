//! App-wide presentation state (card accent colour).
//!
//! DESIGN
//! ======
//! Kept apart from project data so hover effects never touch the repository.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// App-wide presentation state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Accent color (`#rrggbb`) of the last project card the pointer rested
    /// on. Tabs and cards tint with it; `None` keeps the neutral palette.
    pub accent_color: Option<String>,
}

impl UiState {
    pub fn accent(&self) -> Option<&str> {
        self.accent_color.as_deref()
    }
}
