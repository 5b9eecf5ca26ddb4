use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteAllUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteAllUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Returns how many records were removed; zero is not an error.
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let deleted = self.repo.delete_all().await?;
        tracing::info!(deleted, "all user accounts deleted");
        Ok(deleted)
    }
}
