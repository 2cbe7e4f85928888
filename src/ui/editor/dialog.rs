//! Dialog rendering for the edit form.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::editor::state::{EditField, EditorDialogState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, TITLE_ACCENT};

const DIALOG_WIDTH: u16 = 48;

pub fn render_editor_dialog(frame: &mut Frame, state: &EditorDialogState) {
    let EditorDialogState::Visible {
        username,
        fields,
        focused,
        ..
    } = state
    else {
        return;
    };

    let mut lines = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let is_focused = idx == *focused;
        lines.push(label_line(field, is_focused));
        lines.push(input_line(field, is_focused));
        if let Some(error) = &field.error {
            lines.push(Line::from(Span::styled(
                format!("    {}", error),
                Style::default().fg(STATUS_ERROR),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Enter: Save   Esc: Cancel   Tab: Next field",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" Edit {} ", username),
            Style::default().fg(TITLE_ACCENT),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn label_line(field: &EditField, is_focused: bool) -> Line<'static> {
    let marker = if field.id.is_required() { " *" } else { "" };
    let style = if is_focused {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Line::from(Span::styled(
        format!("  {}{}", field.id.label(), marker),
        style,
    ))
}

fn input_line(field: &EditField, is_focused: bool) -> Line<'static> {
    if !is_focused {
        return Line::from(vec![
            Span::raw("  "),
            Span::styled(field.value.clone(), Style::default().fg(HEADER_TEXT)),
        ]);
    }

    // Render the char under the cursor reversed; past the end, a reversed
    // space stands in for the cursor.
    let before: String = field.value.chars().take(field.cursor).collect();
    let at = field.value.chars().nth(field.cursor).unwrap_or(' ');
    let after: String = field.value.chars().skip(field.cursor + 1).collect();
    Line::from(vec![
        Span::raw("  "),
        Span::styled(before, Style::default().fg(HEADER_TEXT)),
        Span::styled(
            at.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::REVERSED),
        ),
        Span::styled(after, Style::default().fg(HEADER_TEXT)),
    ])
}
