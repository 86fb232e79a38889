//! Focus and activation state for the context menu.

use crate::bridge::OutboundBridge;
use crate::i18n::Translation;

/// The four menu actions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Refresh,
    Settings,
    About,
    Exit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 4] = [
        MenuButton::Refresh,
        MenuButton::Settings,
        MenuButton::About,
        MenuButton::Exit,
    ];

    /// Translated button label.
    pub fn label(self, translation: &Translation) -> &'static str {
        match self {
            MenuButton::Refresh => translation.refresh,
            MenuButton::Settings => translation.settings,
            MenuButton::About => translation.about,
            MenuButton::Exit => translation.exit,
        }
    }

    /// Exit is visually set apart from the other actions.
    pub fn is_danger(self) -> bool {
        matches!(self, MenuButton::Exit)
    }

    fn index(self) -> usize {
        match self {
            MenuButton::Refresh => 0,
            MenuButton::Settings => 1,
            MenuButton::About => 2,
            MenuButton::Exit => 3,
        }
    }
}

/// Keyboard focus over the button column. One button is always focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    focus: MenuButton,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            focus: MenuButton::Refresh,
        }
    }
}

impl MenuState {
    pub fn focused(&self) -> MenuButton {
        self.focus
    }

    /// Move focus down, wrapping past the last button.
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % MenuButton::ALL.len();
        self.focus = MenuButton::ALL[next];
    }

    /// Move focus up, wrapping past the first button.
    pub fn focus_prev(&mut self) {
        let len = MenuButton::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = MenuButton::ALL[prev];
    }

    /// Fire the focused button's notification. Fire-and-forget: the host
    /// decides what happens next, including whether the UI gets torn down.
    pub fn activate(&self, bridge: &OutboundBridge) {
        match self.focus {
            MenuButton::Refresh => bridge.request_refresh(),
            MenuButton::Settings => bridge.request_settings(),
            MenuButton::About => bridge.request_about(),
            MenuButton::Exit => bridge.request_exit(),
        }
    }
}
