//! Customer record as served by the backend.

use serde::{Deserialize, Serialize};

/// A registered loyalty-card holder.
///
/// The identifier is opaque and backend-assigned. `cuts_remaining` is not floored
/// client-side; the backend owns the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub cuts_remaining: i64,
}

impl Customer {
    /// Case-insensitive substring match against name or phone number.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.phone_number.to_lowercase().contains(needle)
    }
}
