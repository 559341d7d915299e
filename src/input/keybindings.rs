use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::analysis::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Analysis
    Analyze,
    StartNew,

    // Reply
    SelectTone(Tone),
    NextTone,
    CopyReply,

    // Editing
    SwitchFocus,

    Quit,

    // Help
    Help, // Toggle help view
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

/// A displayable keybinding entry
#[derive(Debug, Clone)]
pub struct KeybindingEntry {
    pub key: String,
    pub description: String,
    pub category: &'static str,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Every printable key is text input, so all bindings use Ctrl,
    /// function keys or Tab.
    pub fn new() -> Self {
        let mut map = HashMap::new();

        map.insert(ctrl_key('s'), Action::Analyze);
        map.insert(ctrl_key('n'), Action::StartNew);

        map.insert(key_code(KeyCode::F(5)), Action::SelectTone(Tone::Formal));
        map.insert(key_code(KeyCode::F(6)), Action::SelectTone(Tone::Friendly));
        map.insert(key_code(KeyCode::F(7)), Action::SelectTone(Tone::Persuasive));
        map.insert(ctrl_key('t'), Action::NextTone);
        map.insert(ctrl_key('y'), Action::CopyReply);

        map.insert(key_code(KeyCode::Tab), Action::SwitchFocus);
        map.insert(shift_key_code(KeyCode::BackTab), Action::SwitchFocus);

        map.insert(ctrl_key('q'), Action::Quit);
        map.insert(ctrl_key('c'), Action::Quit);

        map.insert(key_code(KeyCode::F(1)), Action::Help);

        Self { bindings: map }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// Get all keybindings as displayable entries grouped by category
    pub fn all_bindings(&self) -> Vec<KeybindingEntry> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(event, action)| KeybindingEntry {
                key: format_key_event(event),
                description: action_description(action),
                category: action_category(action),
            })
            .collect();

        // Sort by category first, then by description
        entries.sort_by(|a, b| {
            category_order(a.category)
                .cmp(&category_order(b.category))
                .then_with(|| a.description.cmp(&b.description))
                .then_with(|| a.key.cmp(&b.key))
        });
        entries
    }
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Format a KeyEvent for display
fn format_key_event(event: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl+");
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt+");
    }

    let key_str = match event.code {
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", event.code),
    };

    format!("{}{}", parts.join(""), key_str)
}

/// Get a human-readable description for an action
fn action_description(action: &Action) -> String {
    match action {
        Action::Analyze => "Generate replies".to_string(),
        Action::StartNew => "Start new (clear everything)".to_string(),
        Action::SelectTone(tone) => format!("{} tone", tone.label()),
        Action::NextTone => "Next tone".to_string(),
        Action::CopyReply => "Copy reply to clipboard".to_string(),
        Action::SwitchFocus => "Switch between email and reply".to_string(),
        Action::Quit => "Quit".to_string(),
        Action::Help => "Toggle help".to_string(),
    }
}

/// Get the category for an action
fn action_category(action: &Action) -> &'static str {
    match action {
        Action::Analyze | Action::StartNew => "Analysis",
        Action::SelectTone(_) | Action::NextTone | Action::CopyReply => "Reply",
        Action::SwitchFocus => "Editing",
        Action::Quit | Action::Help => "General",
    }
}

/// Get sort order for categories
fn category_order(category: &str) -> u8 {
    match category {
        "Analysis" => 0,
        "Reply" => 1,
        "Editing" => 2,
        "General" => 3,
        _ => 99,
    }
}
