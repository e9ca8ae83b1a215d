use std::sync::Arc;

use super::{CompanyService, EmployeeService};
use crate::repository::RepositoryManager;

/// Owns one instance of every service, all sharing the same repositories.
#[derive(Clone)]
pub struct ServiceManager {
    company: Arc<CompanyService>,
    employee: Arc<EmployeeService>,
}

impl ServiceManager {
    pub fn new(repository: Arc<dyn RepositoryManager>) -> Self {
        Self {
            company: Arc::new(CompanyService::new(repository.clone())),
            employee: Arc::new(EmployeeService::new(repository)),
        }
    }

    pub fn company(&self) -> &Arc<CompanyService> {
        &self.company
    }

    pub fn employee(&self) -> &Arc<EmployeeService> {
        &self.employee
    }
}
