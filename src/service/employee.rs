use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use super::ServiceError;
use crate::domain::Employee;
use crate::dto::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
use crate::repository::{RepositoryError, RepositoryManager, Tracked};

/// Employee use cases. Every operation is scoped to an existing company.
pub struct EmployeeService {
    repository: Arc<dyn RepositoryManager>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn RepositoryManager>) -> Self {
        Self { repository }
    }

    pub fn get_employees(
        &self,
        company_id: Uuid,
        track_changes: bool,
    ) -> Result<Vec<EmployeeDto>, ServiceError> {
        debug!(%company_id, track_changes, "fetching employees");
        self.ensure_company_exists(company_id, track_changes)?;
        let employees = self
            .repository
            .employee()
            .get_employees(company_id, track_changes)?;
        Ok(employees.iter().map(|e| EmployeeDto::from(&e.data)).collect())
    }

    pub fn get_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<EmployeeDto, ServiceError> {
        debug!(%company_id, %id, track_changes, "fetching employee");
        self.ensure_company_exists(company_id, track_changes)?;
        let employee = self.employee_or_not_found(company_id, id, track_changes)?;
        Ok(EmployeeDto::from(&employee.data))
    }

    pub fn create_employee_for_company(
        &self,
        company_id: Uuid,
        employee: EmployeeForCreationDto,
        track_changes: bool,
    ) -> Result<EmployeeDto, ServiceError> {
        debug!(%company_id, "creating employee");
        self.ensure_company_exists(company_id, track_changes)?;

        let mut employee = employee.into_employee(company_id);
        self.repository
            .employee()
            .create_employee_for_company(company_id, &mut employee)
            .map_err(|err| match err {
                RepositoryError::Missing { .. } => {
                    warn!(%company_id, "company removed before employee was added");
                    ServiceError::CompanyNotFound(company_id)
                }
                other => other.into(),
            })?;
        Ok(EmployeeDto::from(&employee))
    }

    pub fn update_employee_for_company(
        &self,
        company_id: Uuid,
        id: Uuid,
        update: EmployeeForUpdateDto,
        company_track_changes: bool,
        employee_track_changes: bool,
    ) -> Result<(), ServiceError> {
        debug!(%company_id, %id, "updating employee");
        self.ensure_company_exists(company_id, company_track_changes)?;

        let mut employee = self.employee_or_not_found(company_id, id, employee_track_changes)?;
        update.apply_to(&mut employee);
        self.repository
            .employee()
            .update_employee(&mut employee)
            .map_err(|err| match err {
                RepositoryError::Missing { .. } => ServiceError::EmployeeNotFound(id),
                other => other.into(),
            })?;
        Ok(())
    }

    pub fn delete_employee_for_company(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<(), ServiceError> {
        debug!(%company_id, %id, "deleting employee");
        self.ensure_company_exists(company_id, track_changes)?;

        let employee = self.employee_or_not_found(company_id, id, track_changes)?;
        self.repository.employee().delete_employee(&employee)?;
        Ok(())
    }

    fn ensure_company_exists(&self, company_id: Uuid, track_changes: bool) -> Result<(), ServiceError> {
        if self
            .repository
            .company()
            .get_company(company_id, track_changes)?
            .is_none()
        {
            warn!(%company_id, "company not found");
            return Err(ServiceError::CompanyNotFound(company_id));
        }
        Ok(())
    }

    fn employee_or_not_found(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Tracked<Employee>, ServiceError> {
        self.repository
            .employee()
            .get_employee(company_id, id, track_changes)?
            .ok_or_else(|| {
                warn!(%company_id, %id, "employee not found");
                ServiceError::EmployeeNotFound(id)
            })
    }
}
