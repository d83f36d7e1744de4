use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("required field missing: {0}")]
    ConditionsNotMet(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("duplicate data: {0}")]
    Duplicated(String),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn conditions_not_met(message: impl Into<String>) -> Self {
        Self::ConditionsNotMet(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicated(message: impl Into<String>) -> Self {
        Self::Duplicated(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
