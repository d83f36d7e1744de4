use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError,
    film::{Film, FilmPatch, MAX_DESCRIPTION_CHARS, NewFilm, earliest_release_date},
    user::{NewUser, User, UserPatch},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub duration: i64,
}

impl CreateFilmRequest {
    /// Fail-fast validation; the first violated rule wins.
    pub fn into_new(self) -> Result<NewFilm, DomainError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(DomainError::conditions_not_met("film name must not be blank")),
        };
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(DomainError::validation(
                "description must be at most 200 characters",
            ));
        }
        if self.release_date < earliest_release_date() {
            return Err(DomainError::validation(
                "release date must not precede 1895-12-28",
            ));
        }
        if self.duration < 0 {
            return Err(DomainError::validation("duration must not be negative"));
        }

        Ok(NewFilm {
            name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmRequest {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
}

impl UpdateFilmRequest {
    /// Validates every field that is present with the same rule used at
    /// creation. `name` is deliberately exempt: a present name is applied
    /// without a blankness re-check, preserving the historical create/update
    /// asymmetry of this API.
    pub fn into_patch(self) -> Result<FilmPatch, DomainError> {
        if let Some(description) = &self.description
            && description.chars().count() > MAX_DESCRIPTION_CHARS
        {
            return Err(DomainError::validation(
                "description must be at most 200 characters",
            ));
        }
        if let Some(release_date) = self.release_date
            && release_date < earliest_release_date()
        {
            return Err(DomainError::validation(
                "release date must not precede 1895-12-28",
            ));
        }
        if let Some(duration) = self.duration
            && duration < 0
        {
            return Err(DomainError::validation("duration must not be negative"));
        }

        Ok(FilmPatch {
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i64,
}

impl From<Film> for FilmResponse {
    fn from(value: Film) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            release_date: value.release_date,
            duration: value.duration,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl CreateUserRequest {
    /// Fail-fast validation; `today` is injected so the future-birthday rule
    /// is deterministic under test.
    pub fn into_new(self, today: NaiveDate) -> Result<NewUser, DomainError> {
        let email = match self.email {
            Some(email) if !email.trim().is_empty() && email.contains('@') => email,
            _ => {
                return Err(DomainError::validation(
                    "email must not be blank and must contain @",
                ));
            }
        };
        let login = match self.login {
            Some(login) if !login.chars().any(char::is_whitespace) => login,
            _ => {
                return Err(DomainError::validation(
                    "login must be provided and contain no whitespace",
                ));
            }
        };
        let name = match self.name {
            Some(name) => name,
            None => login.clone(),
        };
        if self.birthday > today {
            return Err(DomainError::validation("birthday must not be in the future"));
        }

        Ok(NewUser {
            email,
            login,
            name,
            birthday: self.birthday,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<u64>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl UpdateUserRequest {
    /// Per-field checks on present fields; `name` is applied unconditionally.
    pub fn into_patch(self, today: NaiveDate) -> Result<UserPatch, DomainError> {
        if let Some(email) = &self.email
            && !email.contains('@')
        {
            return Err(DomainError::validation("email must contain @"));
        }
        if let Some(login) = &self.login
            && login.chars().any(char::is_whitespace)
        {
            return Err(DomainError::validation("login must contain no whitespace"));
        }
        if let Some(birthday) = self.birthday
            && birthday > today
        {
            return Err(DomainError::validation("birthday must not be in the future"));
        }

        Ok(UserPatch {
            email: self.email,
            login: self.login,
            name: self.name,
            birthday: self.birthday,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            email: value.email,
            login: value.login,
            name: value.name,
            birthday: value.birthday,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
