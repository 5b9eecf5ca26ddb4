use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    models::{NewUser, UserAccount, UserChanges},
    repositories::UserRepository,
    value_objects::UserId,
};

/// Process-local store keeping accounts in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> anyhow::Result<UserAccount> {
        let now = Utc::now();
        let account = UserAccount {
            id: UserId::generate(),
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            dob: user.dob,
            bio: user.bio,
            created_at: Some(now),
            updated_at: Some(now),
        };
        let mut users = self.users.write().await;
        users.push(account.clone());
        Ok(account)
    }

    async fn list(&self) -> anyhow::Result<Vec<UserAccount>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get(&self, id: &UserId) -> anyhow::Result<Option<UserAccount>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> anyhow::Result<Option<UserAccount>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| &u.id == id).map(|user| {
            changes.apply(user);
            user.updated_at = Some(Utc::now());
            user.clone()
        }))
    }

    async fn delete(&self, id: &UserId) -> anyhow::Result<u64> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok((before - users.len()) as u64)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let mut users = self.users.write().await;
        let deleted = users.len() as u64;
        users.clear();
        Ok(deleted)
    }
}
