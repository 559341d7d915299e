//! Overlay popups

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::theme::{Theme, borders};
use crate::input::KeybindingEntry;

/// Render the keybinding help popup, grouped by category
pub fn render_help_popup(frame: &mut Frame, area: Rect, keys: &[KeybindingEntry]) {
    let mut categories: Vec<&str> = Vec::new();
    for key in keys {
        if categories.last() != Some(&key.category) {
            categories.push(key.category);
        }
    }
    let rows = keys.len() + categories.len() * 2;
    let popup_area = help_popup_area(area, u16::try_from(rows).unwrap_or(u16::MAX));

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .title_bottom(" F1 or Esc close ")
        .borders(Borders::ALL)
        .border_type(borders::popup())
        .border_style(Theme::border_focused());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut items: Vec<ListItem> = Vec::new();
    let mut current_category: Option<&str> = None;
    let key_width = 12;

    for entry in keys {
        if current_category != Some(entry.category) {
            // Blank line before every category but the first
            if current_category.is_some() {
                items.push(ListItem::new(Line::from("")));
            }

            let header_line = Line::from(vec![
                Span::styled(
                    format!("── {} ", entry.category),
                    Theme::text_secondary().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "─".repeat(
                        inner.width.saturating_sub(entry.category.len() as u16 + 4) as usize
                    ),
                    Theme::border(),
                ),
            ]);
            items.push(ListItem::new(header_line));
            current_category = Some(entry.category);
        }

        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(format!("{:width$}", entry.key, width = key_width), Theme::text_accent()),
            Span::styled(entry.description.as_str(), Theme::text()),
        ]);
        items.push(ListItem::new(line));
    }

    frame.render_widget(List::new(items), inner);
}

const HELP_WIDTH: u16 = 54;

/// Center a box for `rows` lines of content inside `area`, shrinking it to fit
/// small terminals while keeping a two-cell margin where possible.
fn help_popup_area(area: Rect, rows: u16) -> Rect {
    let width = HELP_WIDTH.min(area.width.saturating_sub(4)).max(36).min(area.width);
    let height = rows
        .saturating_add(2)
        .min(area.height.saturating_sub(4))
        .max(10)
        .min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered_in_large_area() {
        let popup = help_popup_area(Rect::new(0, 0, 100, 40), 14);
        assert_eq!(popup, Rect::new(23, 12, 54, 16));
    }

    #[test]
    fn test_popup_stays_inside_small_area() {
        let area = Rect::new(2, 1, 30, 8);
        let popup = help_popup_area(area, 20);
        assert_eq!(popup, area);
    }
}
