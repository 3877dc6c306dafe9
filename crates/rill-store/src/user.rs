//! Persisted `User` document.

use serde::{Deserialize, Serialize};

/// A user document as persisted in the store.
///
/// `id` is `None` on a freshly mapped entity and is assigned by the
/// store on first save. Client-supplied ids on create are discarded
/// before the entity reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned opaque identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Password (stored as received; hashing is out of scope here).
    pub password: String,
}
