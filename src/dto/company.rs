use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeForCreationDto;
use crate::domain::Company;

/// A company as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub country: String,
}

impl From<&Company> for CompanyDto {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            address: company.address.clone(),
            country: company.country.clone(),
        }
    }
}

/// Payload for creating a company, optionally with its first employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyForCreationDto {
    pub name: String,
    pub address: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

impl CompanyForCreationDto {
    pub fn into_company(self) -> (Company, Vec<EmployeeForCreationDto>) {
        let company = Company::new(self.name, self.address, self.country);
        (company, self.employees.unwrap_or_default())
    }
}

/// Payload for replacing a company's fields. Listed employees are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyForUpdateDto {
    pub name: String,
    pub address: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

impl CompanyForUpdateDto {
    /// Copy the scalar fields onto `company`, returning the employees to add.
    pub fn apply_to(self, company: &mut Company) -> Vec<EmployeeForCreationDto> {
        company.name = self.name;
        company.address = self.address;
        company.country = self.country;
        self.employees.unwrap_or_default()
    }
}
