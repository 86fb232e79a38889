//! Inbound side of the host bridge: one reader thread, one channel, one
//! subscription whose lifetime bounds the listener.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, TryRecvError};

use crate::session::SessionState;

use super::protocol::{decode_line, HostMessage};

/// Max decoded messages buffered ahead of the event loop.
const HOST_CHANNEL_CAPACITY: usize = 64;

/// A live subscription to the host's message channel.
///
/// Created once per UI session and dropped on teardown. Dropping the
/// subscription closes the channel; the reader thread exits on its next send
/// (or at EOF), so no listener leaks across remounts.
pub struct HostSubscription {
    receiver: Receiver<HostMessage>,
    handle: Option<JoinHandle<()>>,
}

impl HostSubscription {
    /// Subscribe to a newline-delimited JSON stream from the host.
    ///
    /// Lines that do not decode to a known message are dropped inside the
    /// reader thread and never reach the event loop.
    pub fn subscribe<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = bounded(HOST_CHANNEL_CAPACITY);
        let handle = thread::spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        tracing::debug!(error = %err, "host channel read error");
                        break;
                    }
                };
                if let Some(message) = decode_line(&line) {
                    if tx.send(message).is_err() {
                        // Subscription dropped; stop listening.
                        break;
                    }
                }
            }
        });
        Self {
            receiver: rx,
            handle: Some(handle),
        }
    }

    /// Subscribe to the host over this process's stdin.
    pub fn subscribe_stdin() -> Self {
        Self::subscribe(std::io::BufReader::new(std::io::stdin()))
    }

    /// Channel endpoint for `select!` in the event loop.
    pub fn receiver(&self) -> &Receiver<HostMessage> {
        &self.receiver
    }

    /// Non-blocking poll, for callers without a select loop.
    pub fn try_recv(&self) -> Result<HostMessage, TryRecvError> {
        self.receiver.try_recv()
    }
}

impl Drop for HostSubscription {
    fn drop(&mut self) {
        // The reader thread may be blocked on the pipe; it exits once its
        // sender fails or the pipe reaches EOF. Join only if it has already
        // finished so teardown never blocks on the host.
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

/// Apply one host message to the session state.
///
/// Runs on the event-loop thread between renders, so both fields of an
/// `updateStatus` land before any render observes either.
pub fn dispatch(state: &mut SessionState, message: HostMessage) {
    match message {
        HostMessage::UpdateStatus { connection, status } => {
            state.apply_status(connection, status);
            tracing::debug!(?connection, ?status, "status updated");
        }
        HostMessage::UpdateLanguage { language } => {
            state.apply_language(language);
            tracing::debug!(
                lang = state.lang_tag(),
                dir = state.direction().attr(),
                "language updated"
            );
        }
    }
}
