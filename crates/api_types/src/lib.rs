use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod user {
    use super::*;

    /// Request body for `/signup`.
    ///
    /// All three fields are required; they are declared as options so the
    /// server can answer an explicit 400 for an absent or empty field
    /// instead of a deserialization failure.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SignupNew {
        pub username: Option<String>,
        pub email: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserCreated {
        pub user_id: Uuid,
    }

    /// Query string for `/users`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserLookup {
        pub email: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserFound {
        pub user_id: Uuid,
    }

    /// Query string shared by `/profile`, `/expense`, `/friends` and
    /// `/getBill`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserQuery {
        pub user_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProfileView {
        pub username: String,
        pub email: String,
        pub total_expenses: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub total_expenses: f64,
    }
}

pub mod friend {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FriendNew {
        pub user_id: Uuid,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FriendCreated {
        pub friend_id: Uuid,
    }

    /// Response body for `/friends`.
    ///
    /// `friends` is the space-joined list of names and `friend_num` the
    /// count, the shape expected by existing clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FriendsView {
        pub friends: String,
        pub friend_num: u64,
    }
}

pub mod bill {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BillNew {
        pub user_id: Uuid,
        pub description: String,
        /// Names of the other people on the bill.
        pub participants: Vec<String>,
        /// Whether the submitting user is on the bill themselves. Only
        /// self-included bills show up in `/getBill`.
        pub includes_me: bool,
        pub my_spending: f64,
        pub friends_spending: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BillCreated {
        pub bill_id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BillView {
        pub description: String,
        pub my_spending: f64,
        /// RFC3339 timestamp of when the bill was recorded.
        pub date: DateTime<Utc>,
        pub participants: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BillsView {
        pub bills: Vec<BillView>,
    }
}

pub mod item {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub user_id: Uuid,
        pub description: String,
        pub item_name: String,
        pub cost: f64,
        /// Free-form note on who the item was shared with.
        pub friends: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemCreated {
        pub item_id: Uuid,
    }
}
