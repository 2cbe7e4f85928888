use std::collections::BTreeSet;

use crate::api::UserRecord;
use crate::ui::mvi::UiState;

/// Lifecycle of the one-shot directory fetch.
///
/// Both outcomes are terminal: there is no automatic retry, a failed fetch
/// stays failed until the program is restarted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    /// The initial fetch is still outstanding.
    #[default]
    Loading,
    /// The fetch failed; no partial data is retained.
    Failed { message: String },
    /// The fetch completed (possibly with zero records).
    Ready,
}

/// The in-memory user directory: ordered record list plus favorite set.
///
/// Owned exclusively by the top-level [`App`](crate::ui::app::App); children
/// only ever see read-only snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    pub phase: LoadPhase,
    pub records: Vec<UserRecord>,
    pub favorites: BTreeSet<u64>,
}

impl UiState for DirectoryState {}

impl DirectoryState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// True once the fetch succeeded but returned zero records. Rendered as
    /// an explicit empty state, distinct from the error state.
    pub fn is_empty(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready) && self.records.is_empty()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(&id)
    }

    pub fn record(&self, id: u64) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_default() {
        assert_eq!(DirectoryState::default().phase, LoadPhase::Loading);
    }

    #[test]
    fn empty_only_when_ready_without_records() {
        let mut state = DirectoryState::default();
        assert!(!state.is_empty());
        state.phase = LoadPhase::Ready;
        assert!(state.is_empty());
        state.phase = LoadPhase::Failed {
            message: "HTTP 500".into(),
        };
        assert!(!state.is_empty());
    }
}
