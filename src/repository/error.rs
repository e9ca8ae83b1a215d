use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("model serialization error: {0}")]
    Serde(String),
    #[error("{collection}:{id} already exists")]
    AlreadyExists { collection: &'static str, id: Uuid },
    #[error("{collection}:{id} does not exist")]
    Missing { collection: &'static str, id: Uuid },
    #[error("{collection}:{id} was not retrieved with change tracking enabled")]
    NotTracked { collection: &'static str, id: Uuid },
    #[error(
        "concurrent write detected for {collection}:{id} (expected version {expected}, got {actual})"
    )]
    ConcurrencyConflict {
        collection: &'static str,
        id: Uuid,
        expected: u64,
        actual: u64,
    },
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serde(err.to_string())
    }
}
