use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::{
    application::dto::{CreateUserRequest, UpdateUserRequest, UserResponse},
    domain::errors::DomainError,
    infrastructure::UserRepository,
};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, DomainError> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<UserResponse, DomainError> {
        let user = request
            .into_new(Utc::now().date_naive())
            .inspect_err(|err| warn!(%err, "user create rejected"))?;

        if self.repository.find_by_email(&user.email).await?.is_some() {
            warn!(email = %user.email, "user create rejected: duplicate email");
            return Err(DomainError::duplicated("this email is already in use"));
        }

        let created = self.repository.insert(user).await?;
        Ok(UserResponse::from(created))
    }

    pub async fn update_user(
        &self,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, DomainError> {
        let Some(id) = request.id else {
            warn!("user update rejected: no id supplied");
            return Err(DomainError::conditions_not_met("id must be provided"));
        };

        let Some(stored) = self.repository.get_by_id(id).await? else {
            warn!(id, "user update rejected: unknown id");
            return Err(DomainError::not_found(format!("user with id = {id} not found")));
        };

        // Uniqueness is only at stake when the patch actually changes the
        // email; keeping the current address must always be allowed.
        if let Some(email) = request.email.as_deref()
            && email != stored.email
            && self.repository.find_by_email(email).await?.is_some()
        {
            warn!(id, "user update rejected: duplicate email");
            return Err(DomainError::duplicated("this email is already in use"));
        }

        let patch = request
            .into_patch(Utc::now().date_naive())
            .inspect_err(|err| warn!(id, %err, "user update rejected"))?;

        let Some(updated) = self.repository.apply_patch(id, patch).await? else {
            return Err(DomainError::not_found(format!("user with id = {id} not found")));
        };

        Ok(UserResponse::from(updated))
    }
}
