//! Action handlers for user input
//!
//! This module is split into focused submodules:
//! - `analysis`: Submitting, tone selection, copy and reset
//! - `input`: Text input handling

mod analysis;
mod input;

use crate::input::Action;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) {
        match action {
            // Analysis
            Action::Analyze => self.submit_analysis().await,
            Action::StartNew => self.start_new(),

            // Reply
            Action::SelectTone(tone) => self.select_tone(tone),
            Action::NextTone => self.next_tone(),
            Action::CopyReply => self.copy_reply(),

            // Editing
            Action::SwitchFocus => self.state.toggle_focus(),

            Action::Quit => {} // Handled in event loop

            // Help
            Action::Help => self.toggle_help(),
        }
    }

    fn toggle_help(&mut self) {
        if self.state.help.visible {
            self.state.help.visible = false;
        } else {
            self.state.help.keybindings = self.bindings.all_bindings();
            self.state.help.visible = true;
        }
    }
}
