pub mod errors;
pub mod film;
pub mod user;
