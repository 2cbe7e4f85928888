//! Unidirectional data-flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every UI feature (directory, edit form, delete confirmation) is a state
//! type, an intent type, and a pure reducer over the two. All side effects
//! stay in [`App`](crate::ui::app::App) and the runtime.

/// Marker trait for UI state objects.
///
/// States are immutable values: a reducer consumes the old state and
/// returns a new one, so they must be cheap to clone and comparable.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events that a reducer
/// turns into a state transition.
pub trait Intent: Send + 'static {}

/// Pure state-transition function: `(State, Intent) -> State`.
///
/// Reducers are the only place state transitions happen; they must not
/// perform side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
