//! Command structs for engine operations.
//!
//! These types group parameters for the write operations that carry more than
//! a couple of arguments (bill and item creation), keeping call sites readable
//! and avoiding long argument lists.

use uuid::Uuid;

/// Create a split bill.
#[derive(Clone, Debug)]
pub struct BillCmd {
    pub user_id: Uuid,
    pub description: String,
    pub participants: Vec<String>,
    pub includes_me: bool,
    pub my_spending: f64,
    pub friends_spending: f64,
}

impl BillCmd {
    #[must_use]
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        my_spending: f64,
        friends_spending: f64,
    ) -> Self {
        Self {
            user_id,
            description: description.into(),
            participants: Vec::new(),
            includes_me: false,
            my_spending,
            friends_spending,
        }
    }

    #[must_use]
    pub fn participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    #[must_use]
    pub fn includes_me(mut self, includes_me: bool) -> Self {
        self.includes_me = includes_me;
        self
    }
}

/// Create an itemized purchase.
#[derive(Clone, Debug)]
pub struct ItemCmd {
    pub user_id: Uuid,
    pub description: String,
    pub item_name: String,
    pub cost: f64,
    pub friends: String,
}

impl ItemCmd {
    #[must_use]
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        item_name: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            user_id,
            description: description.into(),
            item_name: item_name.into(),
            cost,
            friends: String::new(),
        }
    }

    #[must_use]
    pub fn friends(mut self, friends: impl Into<String>) -> Self {
        self.friends = friends.into();
        self
    }
}
