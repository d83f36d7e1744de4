use std::sync::Arc;

use tracing::warn;

use crate::{
    application::dto::{CreateFilmRequest, FilmResponse, UpdateFilmRequest},
    domain::errors::DomainError,
    infrastructure::FilmRepository,
};

#[derive(Clone)]
pub struct FilmService {
    repository: Arc<dyn FilmRepository>,
}

impl FilmService {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_films(&self) -> Result<Vec<FilmResponse>, DomainError> {
        let films = self.repository.list().await?;
        Ok(films.into_iter().map(FilmResponse::from).collect())
    }

    pub async fn create_film(
        &self,
        request: CreateFilmRequest,
    ) -> Result<FilmResponse, DomainError> {
        let film = request
            .into_new()
            .inspect_err(|err| warn!(%err, "film create rejected"))?;

        let created = self.repository.insert(film).await?;
        Ok(FilmResponse::from(created))
    }

    pub async fn update_film(
        &self,
        request: UpdateFilmRequest,
    ) -> Result<FilmResponse, DomainError> {
        let Some(id) = request.id else {
            warn!("film update rejected: no id supplied");
            return Err(DomainError::conditions_not_met("id must be provided"));
        };

        if self.repository.get_by_id(id).await?.is_none() {
            warn!(id, "film update rejected: unknown id");
            return Err(DomainError::not_found(format!("film with id = {id} not found")));
        }

        let patch = request
            .into_patch()
            .inspect_err(|err| warn!(id, %err, "film update rejected"))?;

        let Some(updated) = self.repository.apply_patch(id, patch).await? else {
            return Err(DomainError::not_found(format!("film with id = {id} not found")));
        };

        Ok(FilmResponse::from(updated))
    }
}
