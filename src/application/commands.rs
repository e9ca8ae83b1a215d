//! Write-side intents.

use uuid::Uuid;

use crate::dto::{
    CompanyDto, CompanyForCreationDto, CompanyForUpdateDto, EmployeeDto, EmployeeForCreationDto,
    EmployeeForUpdateDto,
};
use crate::mediator::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCompanyCommand {
    pub company: CompanyForCreationDto,
}

impl Request for CreateCompanyCommand {
    type Response = CompanyDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCompanyCommand {
    pub id: Uuid,
    pub company: CompanyForUpdateDto,
    pub track_changes: bool,
}

impl Request for UpdateCompanyCommand {
    type Response = ();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeCommand {
    pub company_id: Uuid,
    pub employee: EmployeeForCreationDto,
}

impl Request for CreateEmployeeCommand {
    type Response = EmployeeDto;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmployeeCommand {
    pub company_id: Uuid,
    pub id: Uuid,
    pub employee: EmployeeForUpdateDto,
    pub company_track_changes: bool,
    pub employee_track_changes: bool,
}

impl Request for UpdateEmployeeCommand {
    type Response = ();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEmployeeCommand {
    pub company_id: Uuid,
    pub id: Uuid,
    pub track_changes: bool,
}

impl Request for DeleteEmployeeCommand {
    type Response = ();
}
