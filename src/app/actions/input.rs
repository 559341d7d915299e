//! Text input handling (chars, backspace, paste)

use crate::app::state::{Focus, TextEdit};

use super::super::App;

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        self.apply_edit(TextEdit::Insert(c));
    }

    pub(crate) fn handle_backspace(&mut self) {
        self.apply_edit(TextEdit::Backspace);
    }

    pub(crate) fn handle_paste(&mut self, text: &str) {
        // Terminals send CRLF line endings inside bracketed paste
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.apply_edit(TextEdit::InsertStr(&text));
    }

    /// Route an edit to whichever buffer has focus
    fn apply_edit(&mut self, edit: TextEdit<'_>) {
        match self.state.active_focus() {
            Focus::Email => self.state.session.edit_email(edit),
            Focus::Reply => self.state.session.edit_reply(edit),
        }
    }
}
