use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::directory::{DirectoryState, LoadPhase};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, TITLE_ACCENT,
};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, directory: &DirectoryState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (dot, dot_style) = match directory.phase {
            LoadPhase::Loading => ("●", Style::default().fg(HEADER_SEPARATOR)),
            LoadPhase::Failed { .. } => ("●", Style::default().fg(STATUS_ERROR)),
            LoadPhase::Ready => ("●", Style::default().fg(STATUS_OK)),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(dot, dot_style),
            Span::styled("  ", text_style),
            Span::styled("User Profiles", Style::default().fg(TITLE_ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} users", directory.records.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} favorites", directory.favorites.len()),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
