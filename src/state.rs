use std::sync::Arc;

use crate::application::{film_service::FilmService, user_service::UserService};

#[derive(Clone)]
pub struct AppState {
    pub film_service: Arc<FilmService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(film_service: Arc<FilmService>, user_service: Arc<UserService>) -> Self {
        Self {
            film_service,
            user_service,
        }
    }
}
