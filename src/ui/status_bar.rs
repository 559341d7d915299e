//! Header status bar with activity indicator and service info

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{Theme, symbols};
use crate::constants::SPINNER_FRAME_MS;

/// Status bar info for rendering
pub struct StatusInfo<'a> {
    pub title: &'a str,
    pub loading: bool,
    pub last_analyzed: Option<DateTime<Local>>,
    /// Service base URL
    pub service: &'a str,
}

/// Calculate display width of a string (accounting for Unicode)
fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

/// Truncate string to fit display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max_width < 4 {
        return s.chars().take(max_width).collect();
    }

    let mut width = 0;
    let mut result = String::new();

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if width + char_width > max_width - 3 {
            result.push_str("...");
            return result;
        }
        width += char_width;
        result.push(c);
    }
    result
}

/// Strip the scheme so the header shows `host:port`
fn short_service_name(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

pub fn status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo) {
    let style = Theme::status_bar();
    let width = area.width as usize;

    let (indicator, indicator_style) = if info.loading {
        (format!(" {} ", spinner_char()), Theme::status_syncing())
    } else {
        (format!(" {} ", symbols::CONNECTED), Theme::status_connected())
    };

    let activity = if info.loading {
        "Analyzing │ ".to_string()
    } else if let Some(at) = info.last_analyzed {
        format!("Analyzed {} │ ", at.format("%H:%M:%S"))
    } else {
        String::new()
    };

    let left_width = display_width(&indicator) + display_width(info.title);
    let fixed_right_width = display_width(&activity) + 1;
    let available_for_service = width.saturating_sub(left_width + fixed_right_width + 2);
    let service = truncate_to_width(short_service_name(info.service), available_for_service);

    let right_width = fixed_right_width + display_width(&service);
    let padding = " ".repeat(width.saturating_sub(left_width + right_width));

    let line = Line::from(vec![
        Span::styled(indicator, indicator_style),
        Span::styled(info.title.to_string(), Theme::status_title()),
        Span::styled(padding, style),
        Span::styled(activity, style),
        Span::styled(service, Theme::status_bar().fg(super::theme::colors::fg_muted())),
        Span::styled(" ", style),
    ]);

    frame.render_widget(Paragraph::new(line).style(style), area);
}

/// Get an animated spinner character for loading states
pub fn spinner_char() -> char {
    let spinner = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
    let idx = (std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / SPINNER_FRAME_MS) as usize
        % spinner.chars().count();

    spinner.chars().nth(idx).unwrap_or('*')
}
