use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::confirm::ConfirmIntent;
use crate::ui::editor::EditorIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.editor().is_visible() {
        handle_editor_key(app, key);
        return;
    }
    if app.confirm().is_visible() {
        handle_confirm_key(app, key);
        return;
    }
    handle_cards_key(app, key);
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    let columns = app.columns() as i64;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left => app.move_selection(-1),
        KeyCode::Right => app.move_selection(1),
        KeyCode::Up => app.move_selection(-columns),
        KeyCode::Down => app.move_selection(columns),
        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_favorite_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_editor_for_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_confirm_for_selected(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_editor(),
        KeyCode::Enter => app.submit_editor(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Left => app.dispatch_editor(EditorIntent::MoveCursorLeft),
        KeyCode::Right => app.dispatch_editor(EditorIntent::MoveCursorRight),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_editor(EditorIntent::Insert { ch });
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_confirm(ConfirmIntent::Close),
        KeyCode::Enter => app.confirm_delete(),
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            app.dispatch_confirm(ConfirmIntent::ToggleSelection);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
