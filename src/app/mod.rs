//! Application core - owns the state and coordinates input, analysis and rendering

mod actions;
mod event_loop;
mod handlers;
pub mod render_thread;
pub mod state;

use anyhow::Result;

use render_thread::RenderThread;

use crate::analysis::{AnalysisActorHandle, AnalysisClient, AnalysisCommand, spawn_analysis_actor};
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::input::KeyBindings;
use state::AppState;

pub struct App {
    pub(crate) state: AppState,
    pub(crate) bindings: KeyBindings,
    /// Actor that runs analysis requests in the background
    pub(crate) analysis: AnalysisActorHandle,
    pub(crate) clipboard: Box<dyn ClipboardSink>,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let client = AnalysisClient::new(&config.service.base_url, config.service.timeout())?;
        tracing::info!("Using analysis service at {}", client.base_url());

        let analysis = spawn_analysis_actor(client);
        Ok(Self::with_parts(
            config,
            analysis,
            Box::new(SystemClipboard::new()),
        ))
    }

    pub(crate) fn with_parts(
        config: &Config,
        analysis: AnalysisActorHandle,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let state = AppState {
            service_url: config.service.base_url.clone(),
            ..Default::default()
        };

        Self {
            state,
            bindings: KeyBindings::new(),
            analysis,
            clipboard,
            dirty: true, // Start dirty for initial render
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        // An in-flight request is abandoned; its result has nowhere to go
        self.analysis.cmd_tx.send(AnalysisCommand::Shutdown).await.ok();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, EmailAnalyzer, ServiceError, Tone};
    use crate::app::state::{Focus, NoticeKind};
    use crate::clipboard::MemoryClipboard;
    use crate::constants::{MSG_EMAIL_TOO_SHORT, MSG_EMPTY_EMAIL, MSG_REPLY_COPIED};
    use crate::input::Action;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Mutex, Semaphore};

    /// Analyzer that records requests and holds each one until released
    #[derive(Clone)]
    struct GatedAnalyzer {
        gate: Arc<Semaphore>,
        calls: Arc<AtomicUsize>,
        received: Arc<Mutex<Vec<String>>>,
        fail_with: Option<String>,
    }

    impl Default for GatedAnalyzer {
        fn default() -> Self {
            Self {
                gate: Arc::new(Semaphore::new(0)),
                calls: Arc::default(),
                received: Arc::default(),
                fail_with: None,
            }
        }
    }

    impl GatedAnalyzer {
        fn release(&self) {
            self.gate.add_permits(1);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EmailAnalyzer for GatedAnalyzer {
        async fn analyze(&self, email_text: &str) -> Result<AnalysisResult, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().await.push(email_text.to_string());

            let permit = self.gate.acquire().await.map_err(|e| {
                ServiceError::Malformed(format!("gate closed: {}", e))
            })?;
            permit.forget();

            if let Some(ref message) = self.fail_with {
                return Err(ServiceError::Rejected {
                    status: reqwest::StatusCode::TOO_MANY_REQUESTS,
                    message: Some(message.clone()),
                });
            }

            let mut replies = HashMap::new();
            replies.insert("formal".to_string(), "Dear Sir,...".to_string());
            replies.insert("friendly".to_string(), "Hi there!".to_string());
            replies.insert("persuasive".to_string(), "Don't miss out!".to_string());
            Ok(AnalysisResult {
                intent: "Complaint".to_string(),
                intent_explanation: "Customer reports a problem".to_string(),
                replies,
            })
        }
    }

    fn test_app(analyzer: GatedAnalyzer) -> (App, MemoryClipboard) {
        let clipboard = MemoryClipboard::default();
        let app = App::with_parts(
            &Config::default(),
            spawn_analysis_actor(analyzer),
            Box::new(clipboard.clone()),
        );
        (app, clipboard)
    }

    /// Wait for the next analysis event and apply it
    async fn settle(app: &mut App) {
        let event = app.analysis.event_rx.recv().await.unwrap();
        app.handle_analysis_event(event);
    }

    const EMAIL: &str = "My order #1234 arrived damaged. Please advise.";

    #[tokio::test]
    async fn test_loading_spans_request() {
        let analyzer = GatedAnalyzer::default();
        let (mut app, _) = test_app(analyzer.clone());
        app.handle_paste(EMAIL);

        assert!(!app.state.session.is_loading());
        app.handle_action(Action::Analyze).await;
        assert!(app.state.session.is_loading());

        // Nothing arrives while the service is still working
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!app.process_analysis_events());
        assert!(app.state.session.is_loading());

        analyzer.release();
        settle(&mut app).await;
        assert!(!app.state.session.is_loading());
        assert_eq!(analyzer.calls(), 1);
        assert_eq!(analyzer.received.lock().await.as_slice(), [EMAIL]);
    }

    #[tokio::test]
    async fn test_success_shows_formal_reply() {
        let analyzer = GatedAnalyzer::default();
        analyzer.release();
        let (mut app, _) = test_app(analyzer);
        app.handle_paste(EMAIL);

        app.handle_action(Action::Analyze).await;
        settle(&mut app).await;

        let session = &app.state.session;
        assert_eq!(session.selected_tone(), Tone::Formal);
        assert_eq!(session.edited_reply(), "Dear Sir,...");
        assert_eq!(app.state.active_focus(), Focus::Reply);
        assert!(app.state.last_analyzed.is_some());
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let analyzer = GatedAnalyzer::default();
        let (mut app, _) = test_app(analyzer.clone());

        app.handle_paste("  \n  ");
        app.handle_action(Action::Analyze).await;
        assert_eq!(app.state.session.error(), Some(MSG_EMPTY_EMAIL));

        app.handle_action(Action::StartNew).await;
        app.handle_paste("Thanks!");
        app.handle_action(Action::Analyze).await;
        assert_eq!(app.state.session.error(), Some(MSG_EMAIL_TOO_SHORT));

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(analyzer.calls(), 0);
        assert!(!app.state.session.is_loading());
    }

    #[tokio::test]
    async fn test_double_submit_sends_one_request() {
        let analyzer = GatedAnalyzer::default();
        let (mut app, _) = test_app(analyzer.clone());
        app.handle_paste(EMAIL);

        app.handle_action(Action::Analyze).await;
        app.handle_action(Action::Analyze).await;
        analyzer.release();
        settle(&mut app).await;

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(analyzer.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_error_is_displayed() {
        let analyzer = GatedAnalyzer {
            fail_with: Some("quota exceeded".to_string()),
            ..Default::default()
        };
        analyzer.release();
        let (mut app, _) = test_app(analyzer);
        app.handle_paste(EMAIL);

        app.handle_action(Action::Analyze).await;
        settle(&mut app).await;

        assert_eq!(app.state.session.error(), Some("quota exceeded"));
        assert!(!app.state.session.is_loading());
        assert!(!app.state.session.has_result());
    }

    #[tokio::test]
    async fn test_edit_then_switch_tone_then_copy() {
        let analyzer = GatedAnalyzer::default();
        analyzer.release();
        let (mut app, clipboard) = test_app(analyzer);
        app.handle_paste(EMAIL);
        app.handle_action(Action::Analyze).await;
        settle(&mut app).await;

        // Typing goes to the reply editor once a result is shown
        app.handle_char('!');
        assert_eq!(app.state.session.edited_reply(), "Dear Sir,...!");
        assert_eq!(app.state.session.email_text(), EMAIL);

        app.handle_action(Action::SelectTone(Tone::Friendly)).await;
        assert_eq!(app.state.session.edited_reply(), "Hi there!");

        app.handle_backspace();
        app.handle_paste(" How can we help?");
        app.handle_action(Action::CopyReply).await;
        assert_eq!(
            clipboard.last().as_deref(),
            Some("Hi there How can we help?")
        );
        let notice = app.state.notice.as_ref().unwrap();
        assert_eq!(notice.text, MSG_REPLY_COPIED);
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[tokio::test]
    async fn test_start_new_discards_late_result() {
        let analyzer = GatedAnalyzer::default();
        let (mut app, _) = test_app(analyzer.clone());
        app.handle_paste(EMAIL);
        app.handle_action(Action::Analyze).await;

        app.handle_action(Action::StartNew).await;
        app.handle_paste("A brand new email being typed");

        analyzer.release();
        settle(&mut app).await;

        assert!(!app.state.session.is_loading());
        assert!(!app.state.session.has_result());
        assert_eq!(
            app.state.session.email_text(),
            "A brand new email being typed"
        );
        assert_eq!(app.state.active_focus(), Focus::Email);
    }
}
