use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository, value_objects::UserId};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> Result<(), DomainError> {
        let id = UserId::parse(raw_id)?;
        match self.repo.delete(&id).await? {
            0 => Err(DomainError::NotFound(format!("user {id}"))),
            _ => {
                tracing::info!(user_id = %id, "user account deleted");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::models::NewUser, infrastructure::repositories::in_memory::InMemoryUserRepository};

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(NewUser {
                firstname: "A".into(),
                lastname: "B".into(),
                email: "a@b.com".into(),
                dob: "2000-01-01".into(),
                bio: "x".into(),
            })
            .await
            .unwrap();
        let usecase = DeleteUserUseCase::new(repo.clone());
        let id = user.id.to_string();

        usecase.execute(&id).await.unwrap();
        assert!(matches!(usecase.execute(&id).await, Err(DomainError::NotFound(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
