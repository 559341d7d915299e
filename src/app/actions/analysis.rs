//! Submit, tone, copy and reset actions

use crate::analysis::{AnalysisCommand, Tone};
use crate::app::state::{Focus, NoticeKind, SubmitError};
use crate::constants::{MSG_ANALYSIS_FAILED, MSG_REPLY_COPIED};

use super::super::App;

impl App {
    /// Validate the email and hand it to the analysis actor
    pub(crate) async fn submit_analysis(&mut self) {
        let token = match self.state.session.begin_submit() {
            Ok(token) => token,
            Err(SubmitError::Busy) => {
                tracing::debug!("Analysis already in flight, ignoring submit");
                return;
            }
            Err(SubmitError::Invalid(e)) => {
                tracing::debug!("Rejected email input: {}", e);
                return;
            }
        };

        let email_text = self.state.session.email_text().to_string();
        tracing::debug!(
            "Submitting {} chars as analysis {}",
            email_text.chars().count(),
            token
        );

        if self
            .analysis
            .cmd_tx
            .send(AnalysisCommand::Analyze { token, email_text })
            .await
            .is_err()
        {
            tracing::error!("Analysis actor is gone");
            self.state
                .session
                .complete(token, Err(MSG_ANALYSIS_FAILED.to_string()));
        }
    }

    pub(crate) fn select_tone(&mut self, tone: Tone) {
        self.state.session.change_tone(tone);
    }

    pub(crate) fn next_tone(&mut self) {
        self.state.session.next_tone();
    }

    /// Copy the reply buffer exactly as edited. Nothing to copy until a
    /// result is shown.
    pub(crate) fn copy_reply(&mut self) {
        if !self.state.session.has_result() {
            return;
        }

        let text = self.state.session.edited_reply().to_string();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::debug!(
                    "Copied {} reply ({} chars)",
                    self.state.session.selected_tone(),
                    text.chars().count()
                );
                self.state.set_notice(MSG_REPLY_COPIED, NoticeKind::Info);
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                self.state
                    .set_notice(format!("Clipboard unavailable: {}", e), NoticeKind::Warning);
            }
        }
    }

    /// Discard everything and return to an empty email
    pub(crate) fn start_new(&mut self) {
        self.state.session.reset();
        self.state.focus = Focus::Email;
        self.state.notice = None;
        self.state.last_analyzed = None;
    }
}
