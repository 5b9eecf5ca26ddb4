use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, UserAccount},
    repositories::UserRepository,
};

pub const MISSING_FIELDS: &str = "All fields are required";

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

#[derive(Debug, Default)]
pub struct CreateUserRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
}

impl CreateUserRequest {
    fn validate(self) -> Result<NewUser, DomainError> {
        fn required(value: Option<String>) -> Result<String, DomainError> {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| DomainError::Validation(MISSING_FIELDS.to_string()))
        }

        Ok(NewUser {
            firstname: required(self.firstname)?,
            lastname: required(self.lastname)?,
            email: required(self.email)?,
            dob: required(self.dob)?,
            bio: required(self.bio)?,
        })
    }
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<UserAccount, DomainError> {
        let user = request.validate()?;
        let created = self.repo.insert(user).await?;
        tracing::info!(user_id = %created.id, "user account created");
        Ok(created)
    }
}
