//! Single-threaded event loop over host messages, key input, and a render
//! tick. Host messages and key events never interleave inside one iteration,
//! so every render observes a consistent session state.

use std::io::Stderr;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{bounded, never, tick, Receiver};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use hostmenu::bridge::{dispatch, HostMessage, HostSubscription, OutboundBridge};
use hostmenu::config::AppConfig;
use hostmenu::menu::{self, MenuButton, MenuState};
use hostmenu::session::SessionState;

const INPUT_CHANNEL_CAPACITY: usize = 32;

/// What a key press asks the loop to do.
enum KeyAction {
    FocusNext,
    FocusPrev,
    Activate,
    Quit,
    None,
}

fn classify_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Down | KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::Up | KeyCode::BackTab => KeyAction::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

/// Forward terminal key events into a channel so the loop can `select!`
/// over them alongside host messages.
fn spawn_input_thread() -> Receiver<KeyEvent> {
    let (tx, rx) = bounded(INPUT_CHANNEL_CAPACITY);
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(key).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(error = %err, "input read error");
                break;
            }
        }
    });
    rx
}

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    config: &AppConfig,
    state: &mut SessionState,
    bridge: &OutboundBridge,
    subscription: Option<HostSubscription>,
) -> Result<()> {
    let mut menu = MenuState::default();
    let input_rx = spawn_input_thread();
    let ticker = tick(Duration::from_millis(config.tick_ms()));
    let never_rx = never::<HostMessage>();

    let mut running = true;
    let host_attached = subscription.is_some();
    while running {
        terminal.draw(|frame| menu::render(frame, state, &menu))?;

        let host_rx = match &subscription {
            Some(sub) => sub.receiver(),
            None => &never_rx,
        };

        crossbeam_channel::select! {
            recv(host_rx) -> message => {
                match message {
                    Ok(message) => dispatch(state, message),
                    Err(_) => {
                        // Host closed its end of the pipe; this UI only
                        // exists inside the host, so shut down with it.
                        tracing::info!("host channel closed; shutting down");
                        running = false;
                    }
                }
            }
            recv(input_rx) -> key => {
                let Ok(key) = key else {
                    running = false;
                    continue;
                };
                match classify_key(key) {
                    KeyAction::FocusNext => menu.focus_next(),
                    KeyAction::FocusPrev => menu.focus_prev(),
                    KeyAction::Activate => {
                        menu.activate(bridge);
                        // With no host attached nothing will tear us down,
                        // so Exit quits the UI directly.
                        if menu.focused() == MenuButton::Exit && !host_attached {
                            running = false;
                        }
                    }
                    KeyAction::Quit => running = false,
                    KeyAction::None => {}
                }
            }
            recv(ticker) -> _ => {}
        }
    }

    drop(subscription);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_keys_map_to_focus_moves() {
        assert!(matches!(classify_key(press(KeyCode::Down)), KeyAction::FocusNext));
        assert!(matches!(classify_key(press(KeyCode::Tab)), KeyAction::FocusNext));
        assert!(matches!(classify_key(press(KeyCode::Up)), KeyAction::FocusPrev));
        assert!(matches!(classify_key(press(KeyCode::BackTab)), KeyAction::FocusPrev));
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(matches!(classify_key(press(KeyCode::Enter)), KeyAction::Activate));
        assert!(matches!(classify_key(press(KeyCode::Char(' '))), KeyAction::Activate));
    }

    #[test]
    fn quit_keys_quit() {
        assert!(matches!(classify_key(press(KeyCode::Esc)), KeyAction::Quit));
        assert!(matches!(classify_key(press(KeyCode::Char('q'))), KeyAction::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(classify_key(ctrl_c), KeyAction::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert!(matches!(classify_key(key), KeyAction::None));
    }
}
