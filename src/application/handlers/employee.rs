//! Employee handlers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::commands::{
    CreateEmployeeCommand, DeleteEmployeeCommand, UpdateEmployeeCommand,
};
use crate::application::queries::{GetEmployeeQuery, GetEmployeesQuery};
use crate::dto::EmployeeDto;
use crate::mediator::{HandlerError, RequestHandler};
use crate::service::EmployeeService;

pub struct GetEmployeesHandler {
    service: Arc<EmployeeService>,
}

impl GetEmployeesHandler {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for GetEmployeesHandler {
    type Request = GetEmployeesQuery;

    async fn handle(&self, query: GetEmployeesQuery) -> Result<Vec<EmployeeDto>, HandlerError> {
        Ok(self
            .service
            .get_employees(query.company_id, query.track_changes)?)
    }
}

pub struct GetEmployeeHandler {
    service: Arc<EmployeeService>,
}

impl GetEmployeeHandler {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for GetEmployeeHandler {
    type Request = GetEmployeeQuery;

    async fn handle(&self, query: GetEmployeeQuery) -> Result<EmployeeDto, HandlerError> {
        Ok(self
            .service
            .get_employee(query.company_id, query.id, query.track_changes)?)
    }
}

pub struct CreateEmployeeHandler {
    service: Arc<EmployeeService>,
}

impl CreateEmployeeHandler {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for CreateEmployeeHandler {
    type Request = CreateEmployeeCommand;

    async fn handle(&self, command: CreateEmployeeCommand) -> Result<EmployeeDto, HandlerError> {
        Ok(self
            .service
            .create_employee_for_company(command.company_id, command.employee, false)?)
    }
}

pub struct UpdateEmployeeHandler {
    service: Arc<EmployeeService>,
}

impl UpdateEmployeeHandler {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for UpdateEmployeeHandler {
    type Request = UpdateEmployeeCommand;

    async fn handle(&self, command: UpdateEmployeeCommand) -> Result<(), HandlerError> {
        Ok(self.service.update_employee_for_company(
            command.company_id,
            command.id,
            command.employee,
            command.company_track_changes,
            command.employee_track_changes,
        )?)
    }
}

pub struct DeleteEmployeeHandler {
    service: Arc<EmployeeService>,
}

impl DeleteEmployeeHandler {
    pub fn new(service: Arc<EmployeeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for DeleteEmployeeHandler {
    type Request = DeleteEmployeeCommand;

    async fn handle(&self, command: DeleteEmployeeCommand) -> Result<(), HandlerError> {
        Ok(self.service.delete_employee_for_company(
            command.company_id,
            command.id,
            command.track_changes,
        )?)
    }
}
