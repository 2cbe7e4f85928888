mod dialog;
mod intent;
mod reducer;
mod state;
mod validate;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditField, EditorDialogState, FieldId};
pub use validate::{is_valid_email, validate_fields};
