//! JSON message shapes exchanged with the host process.
//!
//! Both directions are newline-delimited JSON. Inbound messages are
//! discriminated by a `"type"` field with the body under `"payload"`;
//! outbound notifications carry only a `"call"` tag.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::status::StatusType;

// ============================================================================
// Host messages (host → UI)
// ============================================================================

/// Messages accepted from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum HostMessage {
    /// Overwrite both status cells at once.
    #[serde(rename = "updateStatus")]
    UpdateStatus {
        connection: StatusType,
        status: StatusType,
    },

    /// Switch the active language (and thus direction and language tag).
    #[serde(rename = "updateLanguage")]
    UpdateLanguage { language: Language },
}

/// Decode one line from the host channel.
///
/// The channel is shared/ambient, so anything that is not a recognized
/// message is dropped without an error: unknown `type` tags, missing payload
/// fields, and non-JSON lines all decode to `None`. The session must never
/// crash on host input.
pub fn decode_line(line: &str) -> Option<HostMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<HostMessage>(trimmed) {
        Ok(message) => Some(message),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring unrecognized host message");
            None
        }
    }
}

// ============================================================================
// Host calls (UI → host)
// ============================================================================

/// Zero-argument notifications sent to the host when a button is activated.
///
/// Names follow the host-side handler methods. Fire-and-forget: no response
/// is awaited and delivery is not acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "call")]
pub enum HostCall {
    OnRefreshClick,
    OnSettingsClick,
    OnAboutClick,
    OnExitClick,
}
