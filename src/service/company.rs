use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ServiceError;
use crate::domain::{Company, Employee};
use crate::dto::{CompanyDto, CompanyForCreationDto, CompanyForUpdateDto, EmployeeForCreationDto};
use crate::repository::{RepositoryError, RepositoryManager, Tracked};

/// Company use cases.
pub struct CompanyService {
    repository: Arc<dyn RepositoryManager>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn RepositoryManager>) -> Self {
        Self { repository }
    }

    pub fn get_all_companies(&self, track_changes: bool) -> Result<Vec<CompanyDto>, ServiceError> {
        debug!(track_changes, "fetching all companies");
        let companies = self.repository.company().get_all_companies(track_changes)?;
        Ok(companies.iter().map(|c| CompanyDto::from(&c.data)).collect())
    }

    pub fn get_company(&self, id: Uuid, track_changes: bool) -> Result<CompanyDto, ServiceError> {
        debug!(%id, track_changes, "fetching company");
        let company = self.company_or_not_found(id, track_changes)?;
        Ok(CompanyDto::from(&company.data))
    }

    /// Store a new company and any employees listed in the payload.
    pub fn create_company(&self, company: CompanyForCreationDto) -> Result<CompanyDto, ServiceError> {
        let (company, employees) = company.into_company();
        debug!(id = %company.id, employees = employees.len(), "creating company");

        let employees = Self::employees_for(company.id, employees);
        self.repository.company().create_company(&company, &employees)?;

        info!(id = %company.id, name = %company.name, "company created");
        Ok(CompanyDto::from(&company))
    }

    pub fn update_company(
        &self,
        id: Uuid,
        update: CompanyForUpdateDto,
        track_changes: bool,
    ) -> Result<(), ServiceError> {
        debug!(%id, track_changes, "updating company");
        let mut company = self.company_or_not_found(id, track_changes)?;
        let employees = Self::employees_for(id, update.apply_to(&mut company));

        self.repository
            .company()
            .update_company(&mut company, &employees)
            .map_err(|err| match err {
                RepositoryError::Missing { .. } => {
                    warn!(%id, "company removed before update");
                    ServiceError::CompanyNotFound(id)
                }
                other => other.into(),
            })?;
        info!(%id, added_employees = employees.len(), "company updated");
        Ok(())
    }

    /// Remove a company; its employees go with it.
    pub fn delete_company(&self, id: Uuid, track_changes: bool) -> Result<(), ServiceError> {
        debug!(%id, track_changes, "deleting company");
        self.company_or_not_found(id, track_changes)?;
        if !self.repository.company().delete_company(id)? {
            warn!(%id, "company removed concurrently");
            return Err(ServiceError::CompanyNotFound(id));
        }
        info!(%id, "company deleted");
        Ok(())
    }

    fn company_or_not_found(
        &self,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Tracked<Company>, ServiceError> {
        match self.repository.company().get_company(id, track_changes)? {
            Some(company) => Ok(company),
            None => {
                warn!(%id, "company not found");
                Err(ServiceError::CompanyNotFound(id))
            }
        }
    }

    fn employees_for(company_id: Uuid, employees: Vec<EmployeeForCreationDto>) -> Vec<Employee> {
        employees
            .into_iter()
            .map(|employee| employee.into_employee(company_id))
            .collect()
    }
}
