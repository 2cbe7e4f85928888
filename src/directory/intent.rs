use crate::api::{RecordPatch, UserRecord};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DirectoryIntent {
    /// The fetch completed; install the records in server order.
    LoadSucceeded { records: Vec<UserRecord> },
    /// The fetch failed with a human-readable message.
    LoadFailed { message: String },
    /// Flip favorite membership for the id. Toggling an id that is not a
    /// member simply adds it.
    ToggleFavorite { id: u64 },
    /// Remove the record and its favorite mark. Idempotent: absent ids are
    /// a no-op.
    DeleteRecord { id: u64 },
    /// Merge validated edit-form values into the matching record. Silent
    /// no-op when the id is absent.
    ApplyPatch { id: u64, patch: RecordPatch },
}

impl Intent for DirectoryIntent {}
