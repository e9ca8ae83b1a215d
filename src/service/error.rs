//! Error types for the service layer.

use thiserror::Error;
use uuid::Uuid;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("The company with id: {0} doesn't exist in the database.")]
    CompanyNotFound(Uuid),
    #[error("Employee with id: {0} doesn't exist in the database.")]
    EmployeeNotFound(Uuid),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
