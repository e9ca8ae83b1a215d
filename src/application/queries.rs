//! Read-side intents.

use uuid::Uuid;

use crate::dto::{CompanyDto, EmployeeDto};
use crate::mediator::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCompaniesQuery {
    pub track_changes: bool,
}

impl Request for GetCompaniesQuery {
    type Response = Vec<CompanyDto>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCompanyQuery {
    pub id: Uuid,
    pub track_changes: bool,
}

impl Request for GetCompanyQuery {
    type Response = CompanyDto;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEmployeesQuery {
    pub company_id: Uuid,
    pub track_changes: bool,
}

impl Request for GetEmployeesQuery {
    type Response = Vec<EmployeeDto>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEmployeeQuery {
    pub company_id: Uuid,
    pub id: Uuid,
    pub track_changes: bool,
}

impl Request for GetEmployeeQuery {
    type Response = EmployeeDto;
}
