//! Session state owned by the UI event loop.
//!
//! The triple (connection, app status, language) lives for one UI session.
//! Only the bridge's inbound dispatch mutates it; everything else reads.

use crate::i18n::{Direction, Language, Locale};
use crate::status::StatusType;

/// Mutable state for one UI session. No persistence; dropped on teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub connection: StatusType,
    pub app_status: StatusType,
    pub language: Language,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            connection: StatusType::Disconnected,
            app_status: StatusType::Initializing,
            language: Language::En,
        }
    }
}

impl SessionState {
    /// Overwrite both status cells. Callers run on the single event-loop
    /// thread, so no render can observe one cell updated without the other.
    pub fn apply_status(&mut self, connection: StatusType, app_status: StatusType) {
        self.connection = connection;
        self.app_status = app_status;
    }

    /// Switch the active language. Direction and language tag are derived on
    /// read, so they can never drift from the language itself.
    pub fn apply_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolved translation context for the active language.
    pub fn locale(&self) -> Locale {
        Locale::resolve(self.language)
    }

    /// Document-level text-direction attribute (`ltr`/`rtl`).
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Document-level language tag (`en`/`he`/`ja`).
    pub fn lang_tag(&self) -> &'static str {
        self.language.tag()
    }
}
