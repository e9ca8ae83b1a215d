//! Company handlers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::application::commands::{CreateCompanyCommand, UpdateCompanyCommand};
use crate::application::notifications::CompanyDeletedNotification;
use crate::application::queries::{GetCompaniesQuery, GetCompanyQuery};
use crate::dto::CompanyDto;
use crate::mediator::{HandlerError, NotificationHandler, RequestHandler};
use crate::service::CompanyService;

pub struct GetCompaniesHandler {
    service: Arc<CompanyService>,
}

impl GetCompaniesHandler {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for GetCompaniesHandler {
    type Request = GetCompaniesQuery;

    async fn handle(&self, query: GetCompaniesQuery) -> Result<Vec<CompanyDto>, HandlerError> {
        Ok(self.service.get_all_companies(query.track_changes)?)
    }
}

pub struct GetCompanyHandler {
    service: Arc<CompanyService>,
}

impl GetCompanyHandler {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for GetCompanyHandler {
    type Request = GetCompanyQuery;

    async fn handle(&self, query: GetCompanyQuery) -> Result<CompanyDto, HandlerError> {
        Ok(self.service.get_company(query.id, query.track_changes)?)
    }
}

pub struct CreateCompanyHandler {
    service: Arc<CompanyService>,
}

impl CreateCompanyHandler {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for CreateCompanyHandler {
    type Request = CreateCompanyCommand;

    async fn handle(&self, command: CreateCompanyCommand) -> Result<CompanyDto, HandlerError> {
        Ok(self.service.create_company(command.company)?)
    }
}

pub struct UpdateCompanyHandler {
    service: Arc<CompanyService>,
}

impl UpdateCompanyHandler {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RequestHandler for UpdateCompanyHandler {
    type Request = UpdateCompanyCommand;

    async fn handle(&self, command: UpdateCompanyCommand) -> Result<(), HandlerError> {
        Ok(self
            .service
            .update_company(command.id, command.company, command.track_changes)?)
    }
}

/// Removes the company named by the notification.
pub struct DeleteCompanyListener {
    service: Arc<CompanyService>,
}

impl DeleteCompanyListener {
    pub fn new(service: Arc<CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl NotificationHandler for DeleteCompanyListener {
    type Notification = CompanyDeletedNotification;

    fn name(&self) -> &'static str {
        "delete_company"
    }

    async fn handle(&self, notification: &CompanyDeletedNotification) -> Result<(), HandlerError> {
        Ok(self
            .service
            .delete_company(notification.id, notification.track_changes)?)
    }
}

/// Writes an info line for every deletion request.
pub struct CompanyDeletedLogger;

#[async_trait]
impl NotificationHandler for CompanyDeletedLogger {
    type Notification = CompanyDeletedNotification;

    fn name(&self) -> &'static str {
        "company_deleted_logger"
    }

    async fn handle(&self, notification: &CompanyDeletedNotification) -> Result<(), HandlerError> {
        info!(id = %notification.id, "company deletion requested");
        Ok(())
    }
}
