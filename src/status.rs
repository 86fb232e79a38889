//! Status values reported by the host and their visual classification.
//!
//! Two independent status cells exist at runtime (connection and app status);
//! both draw from the same enumerated domain and the same three visual
//! categories.

use serde::Deserialize;

use crate::i18n::Translation;

/// Status value for a single cell, as reported by the host.
///
/// Wire tags are the PascalCase words (`"Connected"`, `"Ready"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StatusType {
    Connected,
    Disconnected,
    Connecting,
    Ready,
    Initializing,
    Error,
}

/// Visual styling category for a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualCategory {
    /// Healthy (Connected, Ready)
    Connected,
    /// Unhealthy (Disconnected, Error)
    Disconnected,
    /// In transition (Connecting, Initializing)
    Loading,
}

impl StatusType {
    /// Parse a host-supplied status tag. Unknown tags resolve to `Error` so a
    /// status cell is never blank; the cell degrades to the unhealthy style
    /// instead of hiding.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Connected" => Self::Connected,
            "Disconnected" => Self::Disconnected,
            "Connecting" => Self::Connecting,
            "Ready" => Self::Ready,
            "Initializing" => Self::Initializing,
            _ => Self::Error,
        }
    }

    /// Map a status value to its visual category. Total over the domain.
    pub fn category(&self) -> VisualCategory {
        match self {
            Self::Connected | Self::Ready => VisualCategory::Connected,
            Self::Disconnected | Self::Error => VisualCategory::Disconnected,
            Self::Connecting | Self::Initializing => VisualCategory::Loading,
        }
    }

    /// Localized display text for this status value.
    pub fn label(&self, translation: &Translation) -> &'static str {
        match self {
            Self::Connected => translation.connected,
            Self::Disconnected => translation.disconnected,
            Self::Connecting => translation.connecting,
            Self::Ready => translation.ready,
            Self::Initializing => translation.initializing,
            Self::Error => translation.error,
        }
    }

    /// Unicode indicator rendered next to the status text.
    pub fn indicator(&self) -> &'static str {
        match self.category() {
            VisualCategory::Connected => "●",
            VisualCategory::Disconnected => "○",
            VisualCategory::Loading => "◐",
        }
    }
}

/// Resolve a status cell in one call: visual category plus localized text.
pub fn classify(status: StatusType, translation: &Translation) -> (VisualCategory, &'static str) {
    (status.category(), status.label(translation))
}
