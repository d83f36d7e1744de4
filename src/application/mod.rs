pub mod dto;
pub mod film_service;
pub mod user_service;
