use crate::api::UserRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Website,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Website => "Website",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FieldId::Name | FieldId::Email)
    }
}

/// One text input of the edit form: current value, cursor position (in
/// chars), and the inline validation error, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct EditField {
    pub id: FieldId,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl EditField {
    fn from_value(id: FieldId, value: &str) -> Self {
        Self {
            id,
            value: value.to_string(),
            cursor: value.chars().count(),
            error: None,
        }
    }

    pub fn insert(&mut self, ch: char) {
        let at = byte_index(&self.value, self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = byte_index(&self.value, self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        self.error = None;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }
}

fn byte_index(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(value.len())
}

/// The edit session. At most one exists at a time; `Visible` holds a
/// detached copy of the target record's field values, never a live
/// reference into the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorDialogState {
    #[default]
    Hidden,
    Visible {
        record_id: u64,
        /// Shown in the dialog title as "Edit {username}".
        username: String,
        fields: Vec<EditField>,
        focused: usize,
    },
}

impl UiState for EditorDialogState {}

impl EditorDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Snapshot a record into a fresh session.
    pub fn open(record: &UserRecord) -> Self {
        Self::Visible {
            record_id: record.id,
            username: record.username.clone(),
            fields: vec![
                EditField::from_value(FieldId::Name, &record.name),
                EditField::from_value(FieldId::Email, &record.email),
                EditField::from_value(FieldId::Phone, &record.phone),
                EditField::from_value(FieldId::Website, &record.website),
            ],
            focused: 0,
        }
    }
}
