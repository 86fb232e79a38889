//! Host bridge: message-driven state synchronization with the native host.
//!
//! Architecture:
//! - Inbound: a reader thread decodes newline-delimited JSON from the host
//!   pipe and forwards recognized messages over a channel; the event loop
//!   applies them to session state one at a time.
//! - Outbound: four zero-argument notifications delivered through a
//!   [`HostNotifier`] capability resolved once at startup (real pipe or
//!   no-op), so a missing host degrades to silence instead of an error.
//!
//! Protocol:
//! - Host → UI: `{"type": "updateStatus"|"updateLanguage", "payload": {...}}`
//! - UI → host: `{"call": "OnRefreshClick"|"OnSettingsClick"|"OnAboutClick"|"OnExitClick"}`

mod inbound;
mod outbound;
mod protocol;


pub use inbound::{dispatch, HostSubscription};
pub use outbound::{HostNotifier, NoopNotifier, OutboundBridge, PipeNotifier};
pub use protocol::{decode_line, HostCall, HostMessage};
