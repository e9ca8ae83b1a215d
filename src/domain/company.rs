use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company. Identity is server-assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country: String,
}

impl Company {
    /// Create a company with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            country: country.into(),
        }
    }
}
