pub use bill_participants::Participant;
pub use bills::Bill;
pub use commands::{BillCmd, ItemCmd};
pub use error::EngineError;
pub use friends::Friend;
pub use items::Item;
pub use ops::{Engine, EngineBuilder};
pub use users::User;

mod bill_participants;
mod bills;
mod commands;
mod error;
mod friends;
mod items;
mod ops;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
