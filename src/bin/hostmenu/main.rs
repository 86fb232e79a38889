//! Hostmenu entrypoint: a context menu embedded in a native host process.
//!
//! # Architecture
//!
//! - Reader thread: decodes host messages from stdin into a channel
//! - Input thread: forwards terminal key events into a channel
//! - Event loop: applies host messages to session state, drives focus,
//!   fires outbound notifications
//! - Rendering goes to stderr; stdout carries nothing but notification lines

mod event_loop;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use hostmenu::bridge::{HostSubscription, OutboundBridge, PipeNotifier};
use hostmenu::config::AppConfig;
use hostmenu::session::SessionState;
use hostmenu::telemetry::init_tracing;
use hostmenu::terminal_restore::TerminalRestoreGuard;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    config.validate()?;
    init_tracing(&config);

    let bridge = if config.standalone {
        OutboundBridge::detached()
    } else {
        OutboundBridge::new(Arc::new(PipeNotifier::stdout()))
    };
    let subscription = if config.standalone {
        None
    } else {
        Some(HostSubscription::subscribe_stdin())
    };

    let mut state = SessionState::default();
    state.apply_language(config.initial_language());

    let guard = TerminalRestoreGuard::new();
    guard.enable_raw_mode()?;
    let mut err = io::stderr();
    guard.enter_alt_screen(&mut err)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;

    let result = event_loop::run(&mut terminal, &config, &mut state, &bridge, subscription);

    // Subscription (if any) was dropped inside run; the guard restores the
    // terminal here even on error.
    drop(guard);
    result
}
