//! Tab and sub-tab selection for the project page.
//!
//! DESIGN
//! ======
//! The contributions sub-tab only exists while the contributions tab is
//! active, so both selectors live in one struct and the rendered panel is
//! derived from it rather than stored.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Tab and sub-tab selection for the project page.
///
/// `active_sub_tab` is only ever `Some` while the contributions tab is
/// active. Fields are private so every change goes through the selectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    active_tab: Tab,
    active_sub_tab: Option<SubTab>,
}

/// Top-level tabs of the project page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Hangout,
    Team,
    Contributions,
    Board,
}

/// Contribution types under the contributions tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubTab {
    Visual,
    #[default]
    Audio,
    Story,
}

/// The single content panel rendered for a navigation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Hangout,
    Team,
    Visual,
    Audio,
    Story,
    Board,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Overview, Tab::Hangout, Tab::Team, Tab::Contributions, Tab::Board];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Hangout => "Hangout",
            Tab::Team => "Team",
            Tab::Contributions => "Contributions",
            Tab::Board => "Message Board",
        }
    }

    /// Icon name used for the tab's CSS icon class.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Overview => "calendar",
            Tab::Hangout => "video",
            Tab::Team => "users",
            Tab::Contributions => "paintbrush",
            Tab::Board => "message-square",
        }
    }
}

impl SubTab {
    pub const ALL: [SubTab; 3] = [SubTab::Visual, SubTab::Audio, SubTab::Story];

    pub fn label(self) -> &'static str {
        match self {
            SubTab::Visual => "Visual",
            SubTab::Audio => "Audio",
            SubTab::Story => "Story",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SubTab::Visual => "paintbrush",
            SubTab::Audio => "music",
            SubTab::Story => "book-open",
        }
    }
}

impl NavigationState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_sub_tab(&self) -> Option<SubTab> {
        self.active_sub_tab
    }

    /// Switch the top-level tab.
    ///
    /// Leaving contributions clears the sub-tab; entering it without a
    /// sub-tab selects [`SubTab::default`].
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab == Tab::Contributions {
            self.active_sub_tab.get_or_insert_with(SubTab::default);
        } else {
            self.active_sub_tab = None;
        }
    }

    /// Select a contribution sub-tab. Ignored outside the contributions tab.
    pub fn select_sub_tab(&mut self, sub_tab: SubTab) {
        if self.active_tab == Tab::Contributions {
            self.active_sub_tab = Some(sub_tab);
        }
    }

    /// Whether the sub-tab bar should be shown.
    pub fn shows_sub_tabs(&self) -> bool {
        self.active_tab == Tab::Contributions
    }

    pub fn visible_panel(&self) -> Panel {
        match self.active_tab {
            Tab::Overview => Panel::Overview,
            Tab::Hangout => Panel::Hangout,
            Tab::Team => Panel::Team,
            Tab::Board => Panel::Board,
            Tab::Contributions => match self.active_sub_tab.unwrap_or_default() {
                SubTab::Visual => Panel::Visual,
                SubTab::Audio => Panel::Audio,
                SubTab::Story => Panel::Story,
            },
        }
    }
}
