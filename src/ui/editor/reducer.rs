use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::{EditField, EditorDialogState};
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorDialogState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Open { record } => EditorDialogState::open(&record),
            EditorIntent::Close => EditorDialogState::Hidden,
            EditorIntent::Insert { ch } => with_focused(state, |field| field.insert(ch)),
            EditorIntent::Backspace => with_focused(state, EditField::backspace),
            EditorIntent::MoveCursorLeft => with_focused(state, EditField::move_left),
            EditorIntent::MoveCursorRight => with_focused(state, EditField::move_right),
            EditorIntent::FocusNext => move_focus(state, 1),
            EditorIntent::FocusPrev => move_focus(state, -1),
            EditorIntent::SetErrors { errors } => match state {
                EditorDialogState::Visible {
                    record_id,
                    username,
                    mut fields,
                    focused,
                } => {
                    for field in fields.iter_mut() {
                        field.error = errors
                            .iter()
                            .find(|(id, _)| *id == field.id)
                            .map(|(_, message)| message.clone());
                    }
                    EditorDialogState::Visible {
                        record_id,
                        username,
                        fields,
                        focused,
                    }
                }
                other => other,
            },
        }
    }
}

fn with_focused(
    state: EditorDialogState,
    edit: impl FnOnce(&mut EditField),
) -> EditorDialogState {
    match state {
        EditorDialogState::Visible {
            record_id,
            username,
            mut fields,
            focused,
        } => {
            if let Some(field) = fields.get_mut(focused) {
                edit(field);
            }
            EditorDialogState::Visible {
                record_id,
                username,
                fields,
                focused,
            }
        }
        other => other,
    }
}

fn move_focus(state: EditorDialogState, direction: i32) -> EditorDialogState {
    match state {
        EditorDialogState::Visible {
            record_id,
            username,
            fields,
            focused,
        } => {
            let len = fields.len();
            let focused = if direction.is_negative() {
                if focused == 0 {
                    len.saturating_sub(1)
                } else {
                    focused - 1
                }
            } else if focused + 1 >= len {
                0
            } else {
                focused + 1
            };
            EditorDialogState::Visible {
                record_id,
                username,
                fields,
                focused,
            }
        }
        other => other,
    }
}
