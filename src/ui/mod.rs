mod assistant;
mod components;
mod popups;
mod status_bar;
pub mod theme;
mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::state::{AppState, NoticeKind};
use crate::constants::APP_TITLE;
use assistant::render_assistant;
use popups::render_help_popup;
use widgets::{StatusInfo, error_bar, help_bar, notice_bar, status_bar};

pub fn render(frame: &mut Frame, state: &AppState) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    status_bar(
        frame,
        header,
        &StatusInfo {
            title: APP_TITLE,
            loading: state.session.is_analyzing(),
            last_analyzed: state.last_analyzed,
            service: &state.service_url,
        },
    );

    render_assistant(frame, body, state);

    match state.notice {
        Some(ref notice) if notice.kind == NoticeKind::Warning => {
            error_bar(frame, footer, &notice.text)
        }
        Some(ref notice) => notice_bar(frame, footer, &notice.text),
        None => help_bar(frame, footer, &footer_hints(state)),
    }

    if state.help.visible {
        render_help_popup(frame, frame.area(), &state.help.keybindings);
    }
}

/// Key hints for the current state. Submit is hidden while a request runs
/// and the reply keys only appear once there is a reply.
fn footer_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    if state.session.can_submit() {
        hints.push(("^S", "generate replies"));
    }
    if state.session.has_result() {
        hints.push(("Tab", "switch pane"));
        hints.push(("F5-F7", "tone"));
        hints.push(("^Y", "copy"));
        hints.push(("^N", "start new"));
    }
    hints.push(("F1", "help"));
    hints.push(("^Q", "quit"));
    hints
}
