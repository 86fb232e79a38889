//! Outbound side of the host bridge: four fire-and-forget notifications.
//!
//! The host may not exist (standalone development, feature not wired yet),
//! so the notifier is a capability chosen once at startup: a real pipe
//! writer when a host is attached, a no-op otherwise. Calls never fail past
//! this boundary; any write problem goes to the trace log and nowhere else.

use std::io::Write;
use std::sync::{Arc, Mutex};

use super::protocol::HostCall;

/// Delivery of host notifications. Implementations must not panic and must
/// not block the UI thread beyond a pipe write.
pub trait HostNotifier: Send + Sync {
    fn notify(&self, call: HostCall);
}

/// Writes one JSON line per notification to the host pipe.
pub struct PipeNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl PipeNotifier<std::io::Stdout> {
    /// Notifier over this process's stdout, the default host pipe.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> PipeNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> HostNotifier for PipeNotifier<W> {
    fn notify(&self, call: HostCall) {
        let line = match serde_json::to_string(&call) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, ?call, "failed to encode host call");
                return;
            }
        };
        let Ok(mut out) = self.out.lock() else {
            tracing::warn!(?call, "host pipe lock poisoned; dropping call");
            return;
        };
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, ?call, "host unreachable; dropping call");
        }
    }
}

/// Standalone mode: every notification is a silent no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl HostNotifier for NoopNotifier {
    fn notify(&self, call: HostCall) {
        tracing::debug!(?call, "no host attached; call dropped");
    }
}

/// Outbound call surface handed to the menu view.
#[derive(Clone)]
pub struct OutboundBridge {
    notifier: Arc<dyn HostNotifier>,
}

impl OutboundBridge {
    pub fn new(notifier: Arc<dyn HostNotifier>) -> Self {
        Self { notifier }
    }

    /// Standalone bridge for development without a host.
    pub fn detached() -> Self {
        Self::new(Arc::new(NoopNotifier))
    }

    pub fn request_refresh(&self) {
        self.notifier.notify(HostCall::OnRefreshClick);
    }

    pub fn request_settings(&self) {
        self.notifier.notify(HostCall::OnSettingsClick);
    }

    pub fn request_about(&self) {
        self.notifier.notify(HostCall::OnAboutClick);
    }

    pub fn request_exit(&self) {
        self.notifier.notify(HostCall::OnExitClick);
    }
}
