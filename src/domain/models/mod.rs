pub mod user;

pub use user::{NewUser, UserAccount, UserChanges};
