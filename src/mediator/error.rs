//! Error types for mediator registration and dispatch.

use thiserror::Error;

use crate::repository::RepositoryError;
use crate::service::ServiceError;

/// Raised while building the registry. Fatal at startup.
#[derive(Debug, Error)]
pub enum MediatorError {
    #[error("a handler for {request} is already registered")]
    DuplicateHandler { request: &'static str },
}

/// Error type for dispatch and handler operations.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No handler registered for this request type.
    #[error("no handler registered for {0}")]
    NoHandlerRegistered(&'static str),
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),
    /// Request body in a media type other than JSON.
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Entity or resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Write rejected because of a concurrent or duplicate write.
    #[error("{0}")]
    Conflict(String),
    /// One or more notification listeners failed.
    #[error("{} notification listener(s) failed", .0.len())]
    ListenerFailures(Vec<ListenerFailure>),
    /// Repository error.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

/// A single listener failure collected by `publish`.
#[derive(Debug, Error)]
#[error("listener {listener} failed: {error}")]
pub struct ListenerFailure {
    pub listener: &'static str,
    pub error: HandlerError,
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::NoHandlerRegistered(_) => 500,
            HandlerError::Validation(_) => 400,
            HandlerError::UnsupportedMediaType(_) => 415,
            HandlerError::NotFound(_) => 404,
            HandlerError::Conflict(_) => 409,
            HandlerError::ListenerFailures(_) => 500,
            HandlerError::Repository(_) => 500,
        }
    }
}

impl From<RepositoryError> for HandlerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists { .. } | RepositoryError::ConcurrencyConflict { .. } => {
                HandlerError::Conflict(err.to_string())
            }
            RepositoryError::Missing { .. } => HandlerError::NotFound(err.to_string()),
            other => HandlerError::Repository(other),
        }
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::CompanyNotFound(_) | ServiceError::EmployeeNotFound(_) => {
                HandlerError::NotFound(err.to_string())
            }
            ServiceError::Repository(err) => err.into(),
        }
    }
}
