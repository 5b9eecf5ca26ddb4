use std::sync::Arc;

use crate::domain::{
    errors::DomainError, models::UserAccount, repositories::UserRepository, value_objects::UserId,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> Result<UserAccount, DomainError> {
        let id = UserId::parse(raw_id)?;
        self.repo
            .get(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::models::NewUser, infrastructure::repositories::in_memory::InMemoryUserRepository};

    #[tokio::test]
    async fn distinguishes_malformed_and_missing_ids() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = GetUserUseCase::new(repo.clone());

        assert!(matches!(
            usecase.execute("nope").await,
            Err(DomainError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            usecase.execute(&UserId::generate().to_string()).await,
            Err(DomainError::NotFound(_))
        ));

        let stored = repo
            .insert(NewUser {
                firstname: "A".into(),
                lastname: "B".into(),
                email: "a@b.com".into(),
                dob: "2000-01-01".into(),
                bio: "x".into(),
            })
            .await
            .unwrap();
        assert_eq!(usecase.execute(&stored.id.to_string()).await.unwrap(), stored);
    }
}
