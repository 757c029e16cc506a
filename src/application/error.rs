// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

/// The three ways a use case can fail, whichever layer raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Store,
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => {
                FailureKind::Validation
            }
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_)) => FailureKind::NotFound,
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_)) => {
                FailureKind::Store
            }
        }
    }

    /// The bare message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Infrastructure(msg)
            | Self::Domain(
                DomainError::Validation(msg)
                | DomainError::NotFound(msg)
                | DomainError::Persistence(msg),
            ) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == FailureKind::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == FailureKind::Validation
    }
}
