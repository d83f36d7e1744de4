pub mod films_handler;
pub mod problem;
pub mod users_handler;
