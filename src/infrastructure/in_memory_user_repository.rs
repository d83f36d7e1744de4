use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        user::{NewUser, User, UserPatch},
    },
    infrastructure::UserRepository,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<u64, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(DomainError::duplicated("this email is already in use"));
        }

        let created = User {
            id: next_id(&users),
            email: user.email,
            login: user.login,
            name: user.name,
            birthday: user.birthday,
        };

        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn apply_patch(&self, id: u64, patch: UserPatch) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        // Uniqueness must hold at the moment of mutation, not only at the
        // service-level pre-check.
        if let Some(email) = &patch.email
            && users
                .values()
                .any(|other| other.id != id && &other.email == email)
        {
            return Err(DomainError::duplicated("this email is already in use"));
        }

        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(login) = patch.login {
            user.login = login;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(birthday) = patch.birthday {
            user.birthday = birthday;
        }

        Ok(Some(user.clone()))
    }
}

// Same allocator as the film store, over an independent key space.
fn next_id(users: &HashMap<u64, User>) -> u64 {
    users.keys().copied().max().unwrap_or(0) + 1
}
