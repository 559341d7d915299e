//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.
//!
//! [`Session`] is the assistant's view-state record. Its fields are private
//! and it only changes through the operations defined on it, so every
//! transition (submit, completion, tone switch, edit, reset) is in one place.

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::analysis::{AnalysisResult, RequestToken, Tone, ValidationError, validate_email_text};
use crate::constants::NOTICE_TTL_SECS;
use crate::input::KeybindingEntry;

/// Coarse phase of the current analysis cycle, used for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input (possibly showing an error)
    Idle,
    /// A request is in flight
    Requesting,
    /// A result is on screen
    Displaying,
}

/// Why a submit did not issue a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// A request is already in flight
    Busy,
    Invalid(ValidationError),
}

/// A single edit to one of the text buffers
#[derive(Debug, Clone, Copy)]
pub enum TextEdit<'a> {
    Insert(char),
    InsertStr(&'a str),
    Backspace,
}

impl TextEdit<'_> {
    fn apply(self, buf: &mut String) {
        match self {
            Self::Insert(c) => buf.push(c),
            Self::InsertStr(s) => buf.push_str(s),
            Self::Backspace => {
                buf.pop();
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    email_text: String,
    result: Option<AnalysisResult>,
    selected_tone: Tone,
    edited_reply: String,
    error: Option<String>,
    loading: bool,
    /// Latest generation; completions carrying an older token are stale
    generation: RequestToken,
    /// Token of the request currently running, if any
    in_flight: Option<RequestToken>,
}

impl Session {
    pub fn email_text(&self) -> &str {
        &self.email_text
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn selected_tone(&self) -> Tone {
        self.selected_tone
    }

    pub fn edited_reply(&self) -> &str {
        &self.edited_reply
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while the running request is one the user is still waiting on.
    /// After a reset the old request keeps `loading` set but is abandoned.
    pub fn is_analyzing(&self) -> bool {
        self.loading && self.in_flight == Some(self.generation)
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Submit is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Requesting
        } else if self.result.is_some() {
            Phase::Displaying
        } else {
            Phase::Idle
        }
    }

    /// Start a submit. On success the caller must send exactly one request
    /// tagged with the returned token.
    ///
    /// Validation failures set the error message and leave everything else
    /// untouched.
    pub fn begin_submit(&mut self) -> Result<RequestToken, SubmitError> {
        if self.loading {
            return Err(SubmitError::Busy);
        }

        if let Err(e) = validate_email_text(&self.email_text) {
            self.error = Some(e.to_string());
            return Err(SubmitError::Invalid(e));
        }

        self.generation = self.generation.next();
        self.loading = true;
        self.error = None;
        self.result = None;
        self.in_flight = Some(self.generation);
        Ok(self.generation)
    }

    /// Apply the outcome of a request. `Err` carries the display message.
    ///
    /// The loading flag is cleared when the running request finishes, whether
    /// or not its outcome is still wanted. The outcome itself is applied only
    /// if no reset or newer submit happened since; returns whether it was.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<AnalysisResult, String>,
    ) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            self.loading = false;
        }

        if token != self.generation {
            tracing::debug!(
                "Discarding stale analysis {} (current {})",
                token,
                self.generation
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                self.edited_reply = result.reply(Tone::Formal).unwrap_or_default().to_string();
                self.selected_tone = Tone::Formal;
                self.result = Some(result);
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Select a tone. The reply buffer is overwritten with that tone's
    /// generated text when there is one, discarding any edit.
    pub fn change_tone(&mut self, tone: Tone) {
        self.selected_tone = tone;
        if let Some(reply) = self.result.as_ref().and_then(|r| r.reply(tone)) {
            self.edited_reply = reply.to_string();
        }
    }

    pub fn next_tone(&mut self) {
        self.change_tone(self.selected_tone.next());
    }

    pub fn edit_reply(&mut self, edit: TextEdit<'_>) {
        edit.apply(&mut self.edited_reply);
    }

    pub fn edit_email(&mut self, edit: TextEdit<'_>) {
        edit.apply(&mut self.email_text);
    }

    /// Return to the initial empty state. A request still running keeps the
    /// loading flag until it finishes, but its outcome will be discarded.
    pub fn reset(&mut self) {
        self.email_text.clear();
        self.result = None;
        self.error = None;
        self.edited_reply.clear();
        self.selected_tone = Tone::Formal;
        self.generation = self.generation.next();
    }
}

/// Which text buffer receives typing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Email,
    Reply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Transient acknowledgment shown over the main view
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub created: Instant,
}

/// Help overlay contents
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    pub visible: bool,
    pub keybindings: Vec<KeybindingEntry>,
}

/// Everything the renderer needs; cloned into the render thread each frame
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub help: HelpState,
    /// Service base URL, shown in the header
    pub service_url: String,
    /// When the last result arrived
    pub last_analyzed: Option<DateTime<Local>>,
}

impl AppState {
    /// Buffer that receives typing. The reply editor only exists once a
    /// result is on screen.
    pub fn active_focus(&self) -> Focus {
        if self.focus == Focus::Reply && self.session.has_result() {
            Focus::Reply
        } else {
            Focus::Email
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.active_focus() {
            Focus::Email if self.session.has_result() => Focus::Reply,
            _ => Focus::Email,
        };
    }

    pub fn set_notice(&mut self, text: impl ToString, kind: NoticeKind) {
        self.notice = Some(Notice {
            text: text.to_string(),
            kind,
            created: Instant::now(),
        });
    }

    /// Clear notice if TTL expired. Returns true if it was cleared.
    pub fn clear_notice_if_expired(&mut self) -> bool {
        if let Some(ref notice) = self.notice
            && notice.created.elapsed().as_secs() >= NOTICE_TTL_SECS
        {
            self.notice = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_ANALYSIS_FAILED, MSG_EMAIL_TOO_SHORT, MSG_EMPTY_EMAIL};
    use std::collections::HashMap;

    fn sample_result() -> AnalysisResult {
        let mut replies = HashMap::new();
        replies.insert("formal".to_string(), "Dear Sir,...".to_string());
        replies.insert("friendly".to_string(), "Hi there!".to_string());
        replies.insert("persuasive".to_string(), "Act now!".to_string());
        AnalysisResult {
            intent: "Inquiry".to_string(),
            intent_explanation: "Asks a question".to_string(),
            replies,
        }
    }

    fn session_with(text: &str) -> Session {
        let mut session = Session::default();
        session.edit_email(TextEdit::InsertStr(text));
        session
    }

    fn displaying_session() -> Session {
        let mut session = session_with("Can you share the Q3 report?");
        let token = session.begin_submit().unwrap();
        assert!(session.complete(token, Ok(sample_result())));
        session
    }

    #[test]
    fn test_blank_submit_sets_error_without_request() {
        let mut session = session_with("   \n ");
        assert_eq!(
            session.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::Empty))
        );
        assert_eq!(session.error(), Some(MSG_EMPTY_EMAIL));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_short_submit_sets_error_without_request() {
        let mut session = session_with("Hi Bob");
        assert_eq!(
            session.begin_submit(),
            Err(SubmitError::Invalid(ValidationError::TooShort))
        );
        assert_eq!(session.error(), Some(MSG_EMAIL_TOO_SHORT));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_submit_starts_request() {
        let mut session = session_with("Short note");
        // A stale error from an earlier attempt is cleared
        session.error = Some("old".to_string());

        let token = session.begin_submit().unwrap();
        assert!(session.is_loading());
        assert!(!session.can_submit());
        assert_eq!(session.error(), None);
        assert!(session.result().is_none());
        assert_eq!(session.phase(), Phase::Requesting);
        assert_eq!(session.in_flight, Some(token));
    }

    #[test]
    fn test_submit_while_loading_is_rejected() {
        let mut session = session_with("Please call me back tomorrow.");
        session.begin_submit().unwrap();
        assert_eq!(session.begin_submit(), Err(SubmitError::Busy));
    }

    #[test]
    fn test_success_selects_formal() {
        let mut session = session_with("Please call me back tomorrow.");
        session.change_tone(Tone::Persuasive);
        let token = session.begin_submit().unwrap();

        assert!(session.complete(token, Ok(sample_result())));
        assert!(!session.is_loading());
        assert_eq!(session.selected_tone(), Tone::Formal);
        assert_eq!(session.edited_reply(), "Dear Sir,...");
        assert_eq!(session.phase(), Phase::Displaying);
    }

    #[test]
    fn test_success_without_formal_reply_leaves_buffer_empty() {
        let mut session = session_with("Please call me back tomorrow.");
        let token = session.begin_submit().unwrap();
        let mut result = sample_result();
        result.replies.remove("formal");

        session.complete(token, Ok(result));
        assert_eq!(session.edited_reply(), "");
        assert!(session.has_result());
    }

    #[test]
    fn test_failure_sets_message_and_clears_loading() {
        let mut session = session_with("Please call me back tomorrow.");
        let token = session.begin_submit().unwrap();

        session.complete(token, Err("quota exceeded".to_string()));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("quota exceeded"));
        assert!(session.result().is_none());

        // Retrying is allowed and clears the error
        session.begin_submit().unwrap();
        assert_eq!(session.error(), None);
        session.complete(session.generation, Err(MSG_ANALYSIS_FAILED.to_string()));
        assert_eq!(session.error(), Some(MSG_ANALYSIS_FAILED));
    }

    #[test]
    fn test_tone_switch_discards_edit() {
        let mut session = displaying_session();
        session.edit_reply(TextEdit::InsertStr(" Kind regards"));
        assert_eq!(session.edited_reply(), "Dear Sir,... Kind regards");

        session.change_tone(Tone::Friendly);
        assert_eq!(session.selected_tone(), Tone::Friendly);
        assert_eq!(session.edited_reply(), "Hi there!");
    }

    #[test]
    fn test_no_per_tone_memory() {
        let mut session = displaying_session();
        session.change_tone(Tone::Friendly);
        session.edit_reply(TextEdit::InsertStr(" Edited"));
        assert_eq!(session.edited_reply(), "Hi there! Edited");

        session.change_tone(Tone::Persuasive);
        assert_eq!(session.edited_reply(), "Act now!");

        // Going back does not restore the edit either
        session.change_tone(Tone::Friendly);
        assert_eq!(session.edited_reply(), "Hi there!");
    }

    #[test]
    fn test_tone_switch_without_reply_keeps_buffer() {
        let mut session = Session::default();
        session.edit_reply(TextEdit::InsertStr("draft"));
        session.change_tone(Tone::Persuasive);
        assert_eq!(session.selected_tone(), Tone::Persuasive);
        assert_eq!(session.edited_reply(), "draft");

        let mut session = displaying_session();
        session.result.as_mut().unwrap().replies.remove("friendly");
        session.edit_reply(TextEdit::Backspace);
        session.change_tone(Tone::Friendly);
        assert_eq!(session.selected_tone(), Tone::Friendly);
        assert_eq!(session.edited_reply(), "Dear Sir,..");
    }

    #[test]
    fn test_next_tone_cycles() {
        let mut session = displaying_session();
        session.next_tone();
        assert_eq!(session.edited_reply(), "Hi there!");
        session.next_tone();
        session.next_tone();
        assert_eq!(session.selected_tone(), Tone::Formal);
        assert_eq!(session.edited_reply(), "Dear Sir,...");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = displaying_session();
        session.change_tone(Tone::Persuasive);
        session.error = Some("something".to_string());

        session.reset();
        assert_eq!(session.email_text(), "");
        assert!(session.result().is_none());
        assert_eq!(session.error(), None);
        assert_eq!(session.edited_reply(), "");
        assert_eq!(session.selected_tone(), Tone::Formal);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_late_response_after_reset_is_discarded() {
        let mut session = session_with("Please call me back tomorrow.");
        let token = session.begin_submit().unwrap();
        session.reset();
        // Still waiting on the old request, but nobody is watching it
        assert!(session.is_loading());
        assert!(!session.is_analyzing());

        assert!(!session.complete(token, Ok(sample_result())));
        assert!(!session.is_loading());
        assert!(session.result().is_none());
        assert_eq!(session.edited_reply(), "");

        let mut session = session_with("Please call me back tomorrow.");
        let token = session.begin_submit().unwrap();
        session.reset();
        assert!(!session.complete(token, Err("boom".to_string())));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_email_edits() {
        let mut session = Session::default();
        session.edit_email(TextEdit::InsertStr("Hello"));
        session.edit_email(TextEdit::Insert('!'));
        session.edit_email(TextEdit::Backspace);
        session.edit_email(TextEdit::Backspace);
        assert_eq!(session.email_text(), "Hell");
    }

    #[test]
    fn test_focus_requires_result() {
        let mut state = AppState::default();
        state.toggle_focus();
        assert_eq!(state.active_focus(), Focus::Email);

        state.session = displaying_session();
        state.toggle_focus();
        assert_eq!(state.active_focus(), Focus::Reply);
        state.toggle_focus();
        assert_eq!(state.active_focus(), Focus::Email);

        state.focus = Focus::Reply;
        state.session.reset();
        assert_eq!(state.active_focus(), Focus::Email);
    }

    #[test]
    fn test_notice_expiry() {
        let mut state = AppState::default();
        state.set_notice("Copied", NoticeKind::Info);
        assert!(!state.clear_notice_if_expired());

        if let Some(ref mut notice) = state.notice {
            notice.created = Instant::now() - std::time::Duration::from_secs(NOTICE_TTL_SECS);
        }
        assert!(state.clear_notice_if_expired());
        assert!(state.notice.is_none());
    }
}
