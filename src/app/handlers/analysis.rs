//! Analysis event handlers

use chrono::Local;

use crate::analysis::AnalysisEvent;
use crate::app::state::Focus;

use super::super::App;

impl App {
    /// Apply a finished analysis to the session. Stale results are dropped
    /// by the session itself.
    pub(crate) fn handle_analysis_event(&mut self, event: AnalysisEvent) {
        match event {
            AnalysisEvent::Completed { token, result } => {
                let intent = result.intent.clone();
                if self.state.session.complete(token, Ok(result)) {
                    tracing::debug!("Showing replies for {} ({})", token, intent);
                    self.state.focus = Focus::Reply;
                    self.state.last_analyzed = Some(Local::now());
                }
            }
            AnalysisEvent::Failed { token, message } => {
                self.state.session.complete(token, Err(message));
            }
        }
    }
}
