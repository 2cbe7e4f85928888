use crate::directory::intent::DirectoryIntent;
use crate::directory::state::{DirectoryState, LoadPhase};
use crate::ui::mvi::Reducer;

pub struct DirectoryReducer;

impl Reducer for DirectoryReducer {
    type State = DirectoryState;
    type Intent = DirectoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Load outcomes replace the whole snapshot: the fetch is the
            // only source of records, so stale favorites cannot survive it.
            DirectoryIntent::LoadSucceeded { records } => DirectoryState {
                phase: LoadPhase::Ready,
                records,
                favorites: Default::default(),
            },
            DirectoryIntent::LoadFailed { message } => DirectoryState {
                phase: LoadPhase::Failed { message },
                ..DirectoryState::default()
            },
            DirectoryIntent::ToggleFavorite { id } => {
                // Copy-then-mutate: the favorite set is replaced wholesale,
                // never edited behind the state's back.
                let mut favorites = state.favorites.clone();
                if !favorites.remove(&id) {
                    favorites.insert(id);
                }
                DirectoryState { favorites, ..state }
            }
            DirectoryIntent::DeleteRecord { id } => {
                let mut records = state.records;
                records.retain(|record| record.id != id);
                let mut favorites = state.favorites.clone();
                favorites.remove(&id);
                DirectoryState {
                    phase: state.phase,
                    records,
                    favorites,
                }
            }
            DirectoryIntent::ApplyPatch { id, patch } => {
                let DirectoryState {
                    phase,
                    mut records,
                    favorites,
                } = state;
                // Upstream ids are unique; patch the first match.
                if let Some(record) = records.iter_mut().find(|record| record.id == id) {
                    record.apply(patch);
                }
                DirectoryState {
                    phase,
                    records,
                    favorites,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserRecord;

    fn ann() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Ann".into(),
            username: "ann1".into(),
            email: "a@x.com".into(),
            phone: "1".into(),
            website: "ann.io".into(),
        }
    }

    fn ready(records: Vec<UserRecord>) -> DirectoryState {
        DirectoryReducer::reduce(
            DirectoryState::default(),
            DirectoryIntent::LoadSucceeded { records },
        )
    }

    #[test]
    fn load_succeeded_preserves_server_order() {
        let mut second = ann();
        second.id = 2;
        let state = ready(vec![ann(), second]);
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(
            state.records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn load_failed_retains_no_partial_data() {
        let mut state = ready(vec![ann()]);
        state = DirectoryReducer::reduce(
            state,
            DirectoryIntent::LoadFailed {
                message: "HTTP 500".into(),
            },
        );
        assert!(state.records.is_empty());
        assert_eq!(state.error_message(), Some("HTTP 500"));
    }

    #[test]
    fn toggle_favorite_on_absent_id_adds_it() {
        let state = DirectoryReducer::reduce(
            ready(vec![ann()]),
            DirectoryIntent::ToggleFavorite { id: 99 },
        );
        assert!(state.is_favorite(99));
    }

    #[test]
    fn delete_removes_record_and_favorite() {
        let state = ready(vec![ann()]);
        let state = DirectoryReducer::reduce(state, DirectoryIntent::ToggleFavorite { id: 1 });
        let state = DirectoryReducer::reduce(state, DirectoryIntent::DeleteRecord { id: 1 });
        assert!(state.record(1).is_none());
        assert!(!state.is_favorite(1));
    }
}
