use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Employee;

/// An employee as returned to clients. The owning company is implied by the
/// route, so it is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            age: employee.age,
            position: employee.position.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForCreationDto {
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl EmployeeForCreationDto {
    pub fn into_employee(self, company_id: Uuid) -> Employee {
        Employee::new(company_id, self.name, self.age, self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForUpdateDto {
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl EmployeeForUpdateDto {
    pub fn apply_to(self, employee: &mut Employee) {
        employee.name = self.name;
        employee.age = self.age;
        employee.position = self.position;
    }
}
