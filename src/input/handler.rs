use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::AppState;

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
    /// Bracketed paste; delivered as one chunk
    Paste(String),
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key(key_event, state, bindings)
        }
        Event::Paste(text) if !state.help.visible => InputResult::Paste(text),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    if state.help.visible {
        return handle_help_input(key, bindings);
    }

    // Check for mapped action
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    handle_text_input(key)
}

fn handle_help_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    // In help modal: Esc or F1 closes, Ctrl+Q still quits
    match bindings.get(&key) {
        Some(Action::Quit) => return InputResult::Quit,
        Some(Action::Help) => return InputResult::Action(Action::Help),
        _ => {}
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => InputResult::Action(Action::Help),
        _ => InputResult::Continue,
    }
}

fn handle_text_input(key: KeyEvent) -> InputResult {
    // Ignore unbound Ctrl/Alt chords instead of typing their letter
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char(c) => InputResult::Char(c),
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => InputResult::Char('\n'),
        _ => InputResult::Continue,
    }
}
