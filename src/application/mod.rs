//! Application layer: CQRS intents and the handlers that serve them.
//!
//! Queries and commands implement [`Request`](crate::mediator::Request) and
//! are answered by exactly one handler; notifications implement
//! [`Notification`](crate::mediator::Notification) and may have any number
//! of listeners. Handlers are thin: they unpack the intent and call the
//! matching service method.
//!
//! [`mediator`] is the composition root: it registers every handler and
//! listener against one set of services.

pub mod commands;
pub mod handlers;
pub mod notifications;
pub mod queries;

use std::sync::Arc;

use crate::mediator::{Mediator, MediatorError};
use crate::repository::RepositoryManager;
use crate::service::ServiceManager;

use handlers::company::{
    CompanyDeletedLogger, CreateCompanyHandler, DeleteCompanyListener, GetCompaniesHandler,
    GetCompanyHandler, UpdateCompanyHandler,
};
use handlers::employee::{
    CreateEmployeeHandler, DeleteEmployeeHandler, GetEmployeeHandler, GetEmployeesHandler,
    UpdateEmployeeHandler,
};

/// Build the mediator with every company and employee handler registered.
pub fn mediator(repository: Arc<dyn RepositoryManager>) -> Result<Mediator, MediatorError> {
    let services = ServiceManager::new(repository);
    let company = services.company();
    let employee = services.employee();

    let mediator = Mediator::builder()
        .handler(GetCompaniesHandler::new(company.clone()))?
        .handler(GetCompanyHandler::new(company.clone()))?
        .handler(CreateCompanyHandler::new(company.clone()))?
        .handler(UpdateCompanyHandler::new(company.clone()))?
        .listener(DeleteCompanyListener::new(company.clone()))
        .listener(CompanyDeletedLogger)
        .handler(GetEmployeesHandler::new(employee.clone()))?
        .handler(GetEmployeeHandler::new(employee.clone()))?
        .handler(CreateEmployeeHandler::new(employee.clone()))?
        .handler(UpdateEmployeeHandler::new(employee.clone()))?
        .handler(DeleteEmployeeHandler::new(employee.clone()))?
        .build();

    Ok(mediator)
}
