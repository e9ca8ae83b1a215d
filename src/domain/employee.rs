use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee. Always belongs to exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
    pub company_id: Uuid,
}

impl Employee {
    /// Create an employee of `company_id` with a freshly generated identifier.
    pub fn new(
        company_id: Uuid,
        name: impl Into<String>,
        age: i32,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            position: position.into(),
            company_id,
        }
    }
}
