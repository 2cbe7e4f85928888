mod client;
mod types;

pub use client::{DirectoryClient, FetchError, USERS_ENDPOINT};
pub use types::{avatar_url, RecordPatch, UserRecord};
