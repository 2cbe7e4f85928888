mod intent;
mod reducer;
mod state;

pub use intent::DirectoryIntent;
pub use reducer::DirectoryReducer;
pub use state::{DirectoryState, LoadPhase};
