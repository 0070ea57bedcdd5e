use serde::{Deserialize, Serialize};

/// A user row as delivered by the upstream `/users` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserRecord {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    /// Last update timestamp, kept verbatim for display.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}
