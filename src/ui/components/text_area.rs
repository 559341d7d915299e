use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{Theme, borders};
use crate::ui::widgets::{sanitize_text, wrap_text};

/// A bordered, append-only text editor
pub struct TextArea<'a> {
    pub title: String,
    pub text: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

/// Render the editor, scrolled so the end of the text stays visible.
/// Places the terminal cursor after the last character when focused.
pub fn render_text_area(frame: &mut Frame, area: Rect, editor: &TextArea) {
    let (border_style, border_type) = if editor.focused {
        (Theme::border_focused(), borders::popup())
    } else {
        (Theme::border(), borders::panel())
    };

    let block = Block::default()
        .title(format!(" {} ", editor.title))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if editor.text.is_empty() {
        let paragraph = Paragraph::new(editor.placeholder).style(Theme::text_muted());
        frame.render_widget(paragraph, inner);
        if editor.focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // Leave one column so the cursor never lands on the border
    let rows = wrap_text(&sanitize_text(editor.text), inner.width.saturating_sub(1) as usize);
    let visible = inner.height as usize;
    let skip = rows.len().saturating_sub(visible);

    let lines: Vec<Line> = rows[skip..]
        .iter()
        .map(|row| Line::styled(row.clone(), Theme::text()))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if editor.focused
        && let Some(last) = rows.last()
    {
        use unicode_width::UnicodeWidthStr;
        let x = inner.x + last.width() as u16;
        let y = inner.y + (rows.len() - skip - 1) as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}
