//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the project page chrome and panels. They take the
//! page's state signals as props and read app-wide state (viewer, accent)
//! from Leptos context providers.

pub mod contributions_panel;
pub mod hangout_panel;
pub mod message_board;
pub mod overview_panel;
pub mod project_card;
pub mod project_header;
pub mod project_sidebar;
pub mod settings_modal;
pub mod tab_bar;
pub mod team_panel;
