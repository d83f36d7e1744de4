use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        film::{Film, FilmPatch, NewFilm},
    },
    infrastructure::FilmRepository,
};

#[derive(Default)]
pub struct InMemoryFilmRepository {
    films: RwLock<HashMap<u64, Film>>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn list(&self) -> Result<Vec<Film>, DomainError> {
        Ok(self.films.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Film>, DomainError> {
        Ok(self.films.read().await.get(&id).cloned())
    }

    async fn insert(&self, film: NewFilm) -> Result<Film, DomainError> {
        let mut films = self.films.write().await;
        let created = Film {
            id: next_id(&films),
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
        };

        films.insert(created.id, created.clone());
        Ok(created)
    }

    async fn apply_patch(&self, id: u64, patch: FilmPatch) -> Result<Option<Film>, DomainError> {
        let mut films = self.films.write().await;
        let Some(film) = films.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            film.name = name;
        }
        if let Some(description) = patch.description {
            film.description = description;
        }
        if let Some(release_date) = patch.release_date {
            film.release_date = release_date;
        }
        if let Some(duration) = patch.duration {
            film.duration = duration;
        }

        Ok(Some(film.clone()))
    }
}

// Ids grow from the current maximum, so an id is never reused even if records
// were ever removed out of band.
fn next_id(films: &HashMap<u64, Film>) -> u64 {
    films.keys().copied().max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_film(name: &str) -> NewFilm {
        NewFilm {
            name: name.to_string(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            duration: 136,
        }
    }

    #[tokio::test]
    async fn insert_assigns_strictly_increasing_ids() {
        let repository = InMemoryFilmRepository::new();

        let first = repository.insert(new_film("The Matrix")).await.unwrap();
        let second = repository.insert(new_film("Reloaded")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn patch_leaves_absent_fields_untouched() {
        let repository = InMemoryFilmRepository::new();
        let stored = repository.insert(new_film("The Matrix")).await.unwrap();

        let patch = FilmPatch {
            description: Some("simulated reality".to_string()),
            ..FilmPatch::default()
        };
        let updated = repository
            .apply_patch(stored.id, patch)
            .await
            .unwrap()
            .expect("film exists");

        assert_eq!(updated.name, "The Matrix");
        assert_eq!(updated.description, "simulated reality");
        assert_eq!(updated.release_date, stored.release_date);
        assert_eq!(updated.duration, stored.duration);
    }

    #[tokio::test]
    async fn patch_of_unknown_id_returns_none() {
        let repository = InMemoryFilmRepository::new();

        let result = repository.apply_patch(42, FilmPatch::default()).await.unwrap();

        assert!(result.is_none());
    }
}
