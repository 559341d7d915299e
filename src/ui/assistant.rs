//! Main assistant screen: email input, analysis result and reply editor

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
};

use super::components::{TextArea, render_text_area};
use super::status_bar::spinner_char;
use super::theme::Theme;
use super::widgets::sanitize_text;
use crate::analysis::{AnalysisResult, Tone};
use crate::app::state::{AppState, Focus, Phase};
use crate::constants::{EMAIL_PANE_MIN_HEIGHT, MSG_ANALYZING, MSG_DISCARDING};

const EMAIL_PLACEHOLDER: &str = "Paste the email you received here...";

pub fn render_assistant(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;

    let result = match session.phase() {
        Phase::Displaying => session.result(),
        Phase::Idle | Phase::Requesting => None,
    };
    let Some(result) = result else {
        render_email_column(frame, area, state);
        return;
    };

    let email_height = (u32::from(area.height) * 35 / 100) as u16;
    let email_height = email_height.max(EMAIL_PANE_MIN_HEIGHT);
    let [email_area, result_area] = Layout::vertical([
        Constraint::Length(email_height),
        Constraint::Min(EMAIL_PANE_MIN_HEIGHT),
    ])
    .areas(area);

    render_email_column(frame, email_area, state);
    render_result(frame, result_area, state, result);
}

/// Email editor with the error line and loading indicator beneath it
fn render_email_column(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let error_height = u16::from(session.error().is_some());
    let loading_height = u16::from(session.is_loading());

    let [input_area, error_area, loading_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(error_height),
        Constraint::Length(loading_height),
    ])
    .areas(area);

    let editor = TextArea {
        title: format!(
            "Incoming email ({} chars)",
            session.email_text().chars().count()
        ),
        text: session.email_text(),
        placeholder: EMAIL_PLACEHOLDER,
        focused: state.active_focus() == Focus::Email && !state.help.visible,
    };
    render_text_area(frame, input_area, &editor);

    if let Some(error) = session.error() {
        let line = Line::from(vec![
            Span::styled(" ✗ ", Theme::text_error()),
            Span::styled(error.to_string(), Theme::text_error()),
        ]);
        frame.render_widget(Paragraph::new(line), error_area);
    }

    if session.is_analyzing() {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", spinner_char()), Theme::text_warning()),
            Span::styled(MSG_ANALYZING, Theme::text_secondary()),
        ]);
        frame.render_widget(Paragraph::new(line), loading_area);
    } else if session.is_loading() {
        let line = Line::from(Span::styled(
            format!(" {}", MSG_DISCARDING),
            Theme::text_muted(),
        ));
        frame.render_widget(Paragraph::new(line), loading_area);
    }
}

fn render_result(frame: &mut Frame, area: Rect, state: &AppState, result: &AnalysisResult) {
    let explanation = sanitize_text(&result.intent_explanation);
    // Leave room for a wrapped explanation without starving the editor
    let explanation_height = if explanation.is_empty() {
        0
    } else {
        let chars = u16::try_from(explanation.chars().count()).unwrap_or(u16::MAX);
        (chars / area.width.max(1)).saturating_add(1).min(3)
    };

    let [intent_area, explanation_area, tabs_area, reply_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(explanation_height),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    let intent_line = Line::from(vec![
        Span::styled(" Intent ", Theme::text_muted()),
        Span::styled(format!(" {} ", result.intent), Theme::intent_badge(&result.intent)),
    ]);
    frame.render_widget(Paragraph::new(intent_line), intent_area);

    if !explanation.is_empty() {
        let paragraph = Paragraph::new(format!(" {}", explanation))
            .style(Theme::text_secondary())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, explanation_area);
    }

    let selected = state.session.selected_tone();
    render_tone_tabs(frame, tabs_area, selected);

    let editor = TextArea {
        title: format!("{} reply", selected.label()),
        text: state.session.edited_reply(),
        placeholder: "No reply generated for this tone",
        focused: state.active_focus() == Focus::Reply && !state.help.visible,
    };
    render_text_area(frame, reply_area, &editor);
}

fn render_tone_tabs(frame: &mut Frame, area: Rect, selected: Tone) {
    let titles: Vec<Line> = Tone::ALL
        .iter()
        .zip(5u8..)
        .map(|(tone, f)| Line::from(format!("F{} {}", f, tone.label())))
        .collect();
    let index = Tone::ALL.iter().position(|t| *t == selected).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(index)
        .style(Theme::tab())
        .highlight_style(Theme::tab_selected())
        .divider(" │ ");
    frame.render_widget(tabs, area);
}
