//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`navigation`, `message_board`, `membership`,
//! `settings`) so each piece of the project page can be tested without a
//! browser. Pages wrap these plain structs in `RwSignal`s and mutate them
//! through their methods.

pub mod membership;
pub mod message_board;
pub mod navigation;
pub mod project;
pub mod projects;
pub mod settings;
pub mod ui;
pub mod viewer;
