//! Card grid for the user directory.
//!
//! Pure view code: a card is a function of the record, its favorite flag,
//! and whether it is selected. All state lives in the directory store.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::{avatar_url, UserRecord};
use crate::directory::DirectoryState;
use crate::ui::theme::{
    FAVORITE_HEART, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TITLE_ACCENT,
};

pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 8;

/// How many cards fit side by side at the given body width.
pub fn column_count(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

pub fn render_cards(frame: &mut Frame, area: Rect, directory: &DirectoryState, selected: usize) {
    let columns = column_count(area.width);
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    if visible_rows == 0 {
        return;
    }

    // Scroll whole rows so the selected card stays on screen.
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for (index, record) in directory.records.iter().enumerate() {
        let row = index / columns;
        let col = index % columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }

        let rect = Rect {
            x: area.x + (col as u16) * CARD_WIDTH,
            y: area.y + ((row - first_row) as u16) * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width.saturating_sub((col as u16) * CARD_WIDTH)),
            height: CARD_HEIGHT.min(area.height.saturating_sub(((row - first_row) as u16) * CARD_HEIGHT)),
        };
        if rect.width < 4 || rect.height < 3 {
            continue;
        }

        let is_selected = index == selected;
        let card = card_widget(record, directory.is_favorite(record.id), is_selected, rect.width);
        frame.render_widget(card, rect);
    }
}

fn card_widget(
    record: &UserRecord,
    is_favorite: bool,
    is_selected: bool,
    width: u16,
) -> Paragraph<'static> {
    let inner_width = width.saturating_sub(2) as usize;
    let muted = Style::default().fg(MUTED_TEXT);
    let text = Style::default().fg(HEADER_TEXT);

    let heart = if is_favorite {
        Span::styled("♥", Style::default().fg(FAVORITE_HEART))
    } else {
        Span::styled("♡", muted)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate(&format!("@{}", record.username), inner_width),
            muted,
        )),
        Line::from(Span::styled(
            truncate(&avatar_url(&record.username), inner_width),
            muted,
        )),
        Line::from(vec![
            Span::styled("✉ ", muted),
            Span::styled(truncate(&record.email, inner_width.saturating_sub(2)), text),
        ]),
        Line::from(vec![
            Span::styled("☎ ", muted),
            Span::styled(truncate(&record.phone, inner_width.saturating_sub(2)), text),
        ]),
        Line::from(vec![
            Span::styled("🌐 ", muted),
            Span::styled(
                truncate(&record.website, inner_width.saturating_sub(2)),
                text,
            ),
        ]),
        Line::from(heart),
    ];

    let border = if is_selected {
        Style::default().fg(TITLE_ACCENT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                truncate(&record.name, inner_width),
                Style::default().fg(HEADER_TEXT),
            ))
            .borders(Borders::ALL)
            .border_style(border),
    )
}

fn truncate(value: &str, max_len: usize) -> String {
    if value.chars().count() <= max_len {
        return value.to_string();
    }
    let keep: String = value.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_one_column() {
        assert_eq!(column_count(0), 1);
        assert_eq!(column_count(33), 1);
        assert_eq!(column_count(68), 2);
        assert_eq!(column_count(120), 3);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-much-longer-value", 10), "a-much-...");
    }
}
