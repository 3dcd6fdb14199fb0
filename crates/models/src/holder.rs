use serde::{Deserialize, Serialize};

/// Who a booking belongs to, captured once at creation time.
///
/// Name and email are denormalized snapshots; they are never re-fetched
/// from the account service after the booking exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolderIdentity {
    /// Registered account id; `None` for walk-in customers
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl HolderIdentity {
    /// Holder backed by a registered account
    pub fn online(user_id: i64, name: String, email: String) -> Self {
        Self {
            user_id: Some(user_id),
            name,
            email,
        }
    }

    /// Walk-in holder with no account
    pub fn offline(name: String, email: String) -> Self {
        Self {
            user_id: None,
            name,
            email,
        }
    }

    pub const fn is_registered(&self) -> bool {
        self.user_id.is_some()
    }
}
