use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{UserAccount, UserChanges},
    repositories::UserRepository,
    value_objects::UserId,
};

pub const EMPTY_FIELD: &str = "Updated fields must not be empty";

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str, changes: UserChanges) -> Result<UserAccount, DomainError> {
        let id = UserId::parse(raw_id)?;
        if changes.fields().any(|(_, value)| value.is_empty()) {
            return Err(DomainError::Validation(EMPTY_FIELD.to_string()));
        }

        // Nothing to set: report the record as it is.
        let updated = if changes.is_empty() {
            self.repo.get(&id).await?
        } else {
            self.repo.update(&id, &changes).await?
        };

        updated.ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::models::NewUser, infrastructure::repositories::in_memory::InMemoryUserRepository};

    async fn seeded() -> (Arc<InMemoryUserRepository>, UserAccount) {
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
        (repo, user)
    }

    #[tokio::test]
    async fn changes_only_supplied_fields() {
        let (repo, before) = seeded().await;
        let usecase = UpdateUserUseCase::new(repo);

        let after = usecase
            .execute(
                &before.id.to_string(),
                UserChanges {
                    bio: Some("updated".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.bio, "updated");
        assert_eq!(
            (&after.firstname, &after.lastname, &after.email, &after.dob),
            (&before.firstname, &before.lastname, &before.email, &before.dob)
        );
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn empty_patch_returns_record_unchanged() {
        let (repo, before) = seeded().await;
        let usecase = UpdateUserUseCase::new(repo);

        let after = usecase
            .execute(&before.id.to_string(), UserChanges::default())
            .await
            .unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn rejects_empty_values_and_unknown_ids() {
        let (repo, before) = seeded().await;
        let usecase = UpdateUserUseCase::new(repo);

        let blank = UserChanges {
            email: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            usecase.execute(&before.id.to_string(), blank).await,
            Err(DomainError::Validation(_))
        ));

        let rename = UserChanges {
            firstname: Some("C".into()),
            ..Default::default()
        };
        assert!(matches!(
            usecase.execute(&UserId::generate().to_string(), rename.clone()).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            usecase.execute("12345", rename).await,
            Err(DomainError::InvalidIdentifier(_))
        ));
    }
}
