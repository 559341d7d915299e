//! Main event loop and analysis event processing

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::{POLL_BUSY_MS, POLL_IDLE_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Process analysis events FIRST (non-blocking)
            if self.process_analysis_events() {
                self.dirty = true;
            }

            // Clear expired notices
            if self.state.clear_notice_if_expired() {
                self.dirty = true;
            }

            // Keep the spinner moving while a request is in flight
            if self.state.session.is_loading() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread).
            // A skipped frame leaves the flag set so the next pass retries.
            if self.dirty && render_thread.render(self.state.clone()) {
                self.dirty = false;
            }

            // Handle input (adaptive timeout: faster while a spinner is shown)
            let poll_timeout = if self.state.session.is_loading() || self.dirty {
                POLL_BUSY_MS
            } else {
                POLL_IDLE_MS
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action).await,
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Paste(text) => self.handle_paste(&text),
                    InputResult::Continue => {}
                }
            }
        }

        Ok(())
    }

    /// Process events from the analysis actor (non-blocking).
    /// Returns true if any events were processed.
    pub(crate) fn process_analysis_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.analysis.event_rx.try_recv() {
            had_events = true;
            tracing::debug!("Received analysis event {}", event.token());
            self.handle_analysis_event(event);
        }
        had_events
    }
}
