use async_trait::async_trait;

use crate::domain::{
    errors::DomainError,
    film::{Film, FilmPatch, NewFilm},
    user::{NewUser, User, UserPatch},
};

pub mod in_memory_film_repository;
pub mod in_memory_user_repository;

#[async_trait]
pub trait FilmRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Film>, DomainError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<Film>, DomainError>;
    async fn insert(&self, film: NewFilm) -> Result<Film, DomainError>;
    /// Applies `patch` to the stored film, returning `None` when no film has
    /// the given id.
    async fn apply_patch(&self, id: u64, patch: FilmPatch) -> Result<Option<Film>, DomainError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Inserts the user, enforcing email uniqueness atomically with the
    /// insert itself.
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;
    /// Applies `patch` to the stored user, returning `None` when no user has
    /// the given id. Re-checks email uniqueness under the same lock as the
    /// mutation.
    async fn apply_patch(&self, id: u64, patch: UserPatch) -> Result<Option<User>, DomainError>;
}
