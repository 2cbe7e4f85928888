use crate::api::UserRecord;
use crate::ui::editor::state::FieldId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Open a session on a snapshot of the record.
    Open { record: UserRecord },
    /// Discard the session without touching the store.
    Close,
    Insert { ch: char },
    Backspace,
    MoveCursorLeft,
    MoveCursorRight,
    FocusNext,
    FocusPrev,
    /// Attach validation messages to the offending fields; the session
    /// stays open.
    SetErrors { errors: Vec<(FieldId, String)> },
}

impl Intent for EditorIntent {}
