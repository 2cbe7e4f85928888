use crate::api::{FetchError, UserRecord};
use crate::directory::{DirectoryIntent, DirectoryReducer, DirectoryState};
use crate::ui::cards;
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::editor::{validate_fields, EditorDialogState, EditorIntent, EditorReducer};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level UI state container.
///
/// Owns every feature state and is the only place that coordinates across
/// them (e.g. a validated save touching both the editor and the store).
/// Children receive read-only snapshots.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Drives the loading spinner; meaningless once the fetch settles.
    animation_tick: u8,
    /// Index of the selected card within the record list.
    selected: usize,
    directory: DirectoryState,
    editor: EditorDialogState,
    confirm: ConfirmDialogState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            size: None,
            animation_tick: 0,
            selected: 0,
            directory: DirectoryState::default(),
            editor: EditorDialogState::default(),
            confirm: ConfirmDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    pub fn editor(&self) -> &EditorDialogState {
        &self.editor
    }

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// True while any modal dialog is open. Used to structurally prevent a
    /// second session from opening on top of the first.
    pub fn modal_open(&self) -> bool {
        self.editor.is_visible() || self.confirm.is_visible()
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn on_tick(&mut self) {
        if self.directory.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Install the fetch outcome. Both outcomes are terminal; a completion
    /// arriving after the phase already settled is ignored.
    pub fn on_fetch_completed(&mut self, result: Result<Vec<UserRecord>, FetchError>) {
        if !self.directory.is_loading() {
            tracing::warn!("ignoring fetch completion in settled phase");
            return;
        }
        let intent = match result {
            Ok(records) => DirectoryIntent::LoadSucceeded { records },
            Err(err) => DirectoryIntent::LoadFailed {
                message: err.to_string(),
            },
        };
        self.dispatch_directory(intent);
    }

    pub fn dispatch_directory(&mut self, intent: DirectoryIntent) {
        dispatch_mvi!(self, directory, DirectoryReducer, intent);
        self.clamp_selection();
    }

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    // ========================================================================
    // Card selection
    // ========================================================================

    /// Cards per row at the current terminal width.
    pub fn columns(&self) -> usize {
        let width = self.size.map(|(cols, _)| cols).unwrap_or(80);
        cards::column_count(width)
    }

    pub fn selected_record(&self) -> Option<&UserRecord> {
        self.directory.records.get(self.selected)
    }

    /// Move the selection by a signed offset (±1 horizontally, ±columns
    /// vertically), clamped to the record list.
    pub fn move_selection(&mut self, delta: i64) {
        let len = self.directory.records.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as i64 + delta;
        self.selected = target.clamp(0, len as i64 - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.directory.records.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    // ========================================================================
    // Store mutations driven by user actions
    // ========================================================================

    pub fn toggle_favorite_selected(&mut self) {
        let Some(id) = self.selected_record().map(|record| record.id) else {
            return;
        };
        self.dispatch_directory(DirectoryIntent::ToggleFavorite { id });
    }

    // ========================================================================
    // Edit session
    // ========================================================================

    pub fn open_editor_for_selected(&mut self) {
        if self.modal_open() {
            return;
        }
        let Some(record) = self.selected_record().cloned() else {
            return;
        };
        self.dispatch_editor(EditorIntent::Open { record });
    }

    pub fn cancel_editor(&mut self) {
        self.dispatch_editor(EditorIntent::Close);
    }

    /// Validate the form; commit the patch and close on success, surface
    /// inline errors and stay open on failure.
    pub fn submit_editor(&mut self) {
        let EditorDialogState::Visible {
            record_id, fields, ..
        } = &self.editor
        else {
            return;
        };
        let record_id = *record_id;

        match validate_fields(fields) {
            Ok(patch) => {
                self.dispatch_directory(DirectoryIntent::ApplyPatch {
                    id: record_id,
                    patch,
                });
                self.dispatch_editor(EditorIntent::Close);
            }
            Err(errors) => {
                self.dispatch_editor(EditorIntent::SetErrors { errors });
            }
        }
    }

    // ========================================================================
    // Delete confirmation
    // ========================================================================

    pub fn open_confirm_for_selected(&mut self) {
        if self.modal_open() {
            return;
        }
        let Some(record) = self.selected_record() else {
            return;
        };
        let (record_id, name) = (record.id, record.name.clone());
        self.dispatch_confirm(ConfirmIntent::Open { record_id, name });
    }

    /// Apply whichever button is selected in the confirmation prompt.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.confirm.confirmed_target() {
            self.dispatch_directory(DirectoryIntent::DeleteRecord { id });
        }
        self.dispatch_confirm(ConfirmIntent::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::LoadPhase;

    fn record(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.into(),
            username: format!("user{id}"),
            email: format!("{name}@x.com"),
            phone: "1".into(),
            website: "x.io".into(),
        }
    }

    fn loaded_app(records: Vec<UserRecord>) -> App {
        let mut app = App::new();
        app.on_fetch_completed(Ok(records));
        app
    }

    #[test]
    fn fetch_completion_after_settle_is_ignored() {
        let mut app = loaded_app(vec![record(1, "Ann")]);
        app.on_fetch_completed(Err(FetchError::Status { status: 500 }));
        assert_eq!(app.directory().phase, LoadPhase::Ready);
        assert_eq!(app.directory().records.len(), 1);
    }

    #[test]
    fn only_one_modal_at_a_time() {
        let mut app = loaded_app(vec![record(1, "Ann")]);
        app.open_editor_for_selected();
        assert!(app.editor().is_visible());
        app.open_confirm_for_selected();
        assert!(!app.confirm().is_visible());
    }

    #[test]
    fn selection_clamps_after_delete() {
        let mut app = loaded_app(vec![record(1, "Ann"), record(2, "Bob")]);
        app.move_selection(1);
        assert_eq!(app.selected(), 1);
        app.open_confirm_for_selected();
        app.dispatch_confirm(ConfirmIntent::ToggleSelection);
        app.confirm_delete();
        assert_eq!(app.directory().records.len(), 1);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn move_selection_clamps_at_edges() {
        let mut app = loaded_app(vec![record(1, "Ann"), record(2, "Bob")]);
        app.move_selection(-5);
        assert_eq!(app.selected(), 0);
        app.move_selection(10);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn tick_animates_only_while_loading() {
        let mut app = App::new();
        app.on_tick();
        assert_eq!(app.animation_tick(), 1);
        app.on_fetch_completed(Ok(vec![]));
        app.on_tick();
        assert_eq!(app.animation_tick(), 1);
    }
}
