//! User profile records as served by the upstream directory API.

use serde::Deserialize;

/// One user profile. Deserialized from the upstream JSON array; fields the
/// viewer does not display (address, company, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Per-field overrides produced by the edit form. `None` leaves the
/// existing value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl UserRecord {
    /// Merge a patch into this record, keeping unset fields as-is.
    pub fn apply(&mut self, patch: RecordPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
    }
}

/// Deterministic avatar image URL derived from the username.
pub fn avatar_url(username: &str) -> String {
    format!(
        "https://avatars.dicebear.com/v2/avataaars/{}.svg?options[mood][]=happy",
        urlencoding::encode(username)
    )
}
