use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, UserAccount, UserChanges},
    value_objects::UserId,
};

/// Storage port for user accounts. Every method is a single store operation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> anyhow::Result<UserAccount>;
    async fn list(&self) -> anyhow::Result<Vec<UserAccount>>;
    async fn get(&self, id: &UserId) -> anyhow::Result<Option<UserAccount>>;
    /// Applies `changes` and returns the record as it is after the update,
    /// or `None` when no record has this id.
    async fn update(&self, id: &UserId, changes: &UserChanges) -> anyhow::Result<Option<UserAccount>>;
    /// Returns the number of deleted records.
    async fn delete(&self, id: &UserId) -> anyhow::Result<u64>;
    async fn delete_all(&self) -> anyhow::Result<u64>;
}
