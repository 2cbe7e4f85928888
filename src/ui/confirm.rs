//! Delete confirmation dialog: a two-button prompt shown before a record
//! is removed.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

/// Button indices: 0 = Delete, 1 = Cancel.
const BUTTON_COUNT: u8 = 2;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        record_id: u64,
        name: String,
        selected_button: u8,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The id to delete, if the prompt is open with Delete selected.
    pub fn confirmed_target(&self) -> Option<u64> {
        match self {
            Self::Visible {
                record_id,
                selected_button: 0,
                ..
            } => Some(*record_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Open { record_id: u64, name: String },
    Close,
    /// Move between the Delete and Cancel buttons.
    ToggleSelection,
}

impl Intent for ConfirmIntent {}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { record_id, name } => ConfirmDialogState::Visible {
                record_id,
                name,
                // Cancel starts selected so a double-tap cannot delete.
                selected_button: 1,
            },
            ConfirmIntent::Close => ConfirmDialogState::Hidden,
            ConfirmIntent::ToggleSelection => match state {
                ConfirmDialogState::Visible {
                    record_id,
                    name,
                    selected_button,
                } => ConfirmDialogState::Visible {
                    record_id,
                    name,
                    selected_button: (selected_button + 1) % BUTTON_COUNT,
                },
                other => other,
            },
        }
    }
}

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible {
        name,
        selected_button,
        ..
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Delete this user? ",
            Style::default().fg(STATUS_ERROR),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        render_buttons(*selected_button),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_buttons(selected: u8) -> Line<'static> {
    let style_for = |button: u8| {
        if selected == button {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };

    Line::from(vec![
        Span::raw("        "),
        Span::styled(" Delete ", style_for(0)),
        Span::raw("    "),
        Span::styled(" Cancel ", style_for(1)),
    ])
}
