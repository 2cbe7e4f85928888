use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::cards::render_cards;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.directory()), header);

    frame.render_widget(Clear, body);
    draw_body(frame, body, app);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);

    render_editor_dialog(frame, app.editor());
    render_confirm_dialog(frame, app.confirm());
}

fn draw_body(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let directory = app.directory();

    if directory.is_loading() {
        let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
        centered_message(
            frame,
            body,
            vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled("Loading users...", Style::default().fg(HEADER_TEXT)),
            ],
        );
        return;
    }

    if let Some(message) = directory.error_message() {
        centered_message(
            frame,
            body,
            vec![
                Span::styled("✗ ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
            ],
        );
        return;
    }

    if directory.is_empty() {
        centered_message(
            frame,
            body,
            vec![Span::styled(
                "No users found",
                Style::default().fg(MUTED_TEXT),
            )],
        );
        return;
    }

    render_cards(frame, body, directory, app.selected());
}

fn centered_message(frame: &mut Frame<'_>, area: Rect, spans: Vec<Span<'static>>) {
    let mut lines = Vec::new();
    for _ in 0..area.height.saturating_sub(1) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(spans));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
